//! Plot session state driven by UI commands.

use log::info;

use crate::describe::describe;
use crate::function::Function;
use crate::render::{RenderList, SceneRequest, build_scene};
use crate::style::Theme;
use crate::view::{ConfigError, PlaneLayout};

/// Command sent from the UI layer on each interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotCommand {
    /// A selection was finalized; plot this function from now on.
    Select(Function),
    /// Overlay the integral on the next frame.
    Integrate,
    /// Remove the plotted function.
    Clear,
}

/// Plot state: the current function plus a pending integrate request.
#[derive(Debug, Clone)]
pub struct Plot {
    layout: PlaneLayout,
    theme: Theme,
    function: Option<Function>,
    integrate_pending: bool,
}

impl Plot {
    /// Create a plot with default configuration.
    pub fn new() -> Self {
        Self {
            layout: PlaneLayout::default(),
            theme: Theme::default(),
            function: None,
            integrate_pending: false,
        }
    }

    /// Start building a plot with custom configuration.
    pub fn builder() -> PlotBuilder {
        PlotBuilder::default()
    }

    /// Access the layout.
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    /// Access the current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the plotted function.
    pub fn function(&self) -> Option<&Function> {
        self.function.as_ref()
    }

    /// Whether the next frame carries the integral overlay.
    pub fn integrate_pending(&self) -> bool {
        self.integrate_pending
    }

    /// Apply a UI command.
    pub fn apply(&mut self, command: PlotCommand) {
        match command {
            PlotCommand::Select(function) => {
                info!("plotting {}", describe(&function).replace('\n', " "));
                self.function = Some(function);
            }
            PlotCommand::Integrate => {
                if self.function.is_some() {
                    self.integrate_pending = true;
                } else {
                    info!("integrate requested with no function plotted");
                }
            }
            PlotCommand::Clear => {
                self.function = None;
                self.integrate_pending = false;
            }
        }
    }

    /// Build the render list for one redraw.
    ///
    /// The integral overlay is shown once per [`PlotCommand::Integrate`].
    pub fn frame(&mut self) -> RenderList {
        let integrate = std::mem::take(&mut self.integrate_pending);
        build_scene(SceneRequest {
            function: self.function.as_ref(),
            layout: &self.layout,
            theme: &self.theme,
            integrate,
        })
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a plot before construction.
#[derive(Debug, Default)]
pub struct PlotBuilder {
    layout: PlaneLayout,
    theme: Theme,
    function: Option<Function>,
}

impl PlotBuilder {
    /// Set the plane layout.
    ///
    /// The layout is taken as is; use [`PlotBuilder::try_layout`] for layouts
    /// that were not loaded through [`PlaneLayout::from_reader`].
    pub fn layout(mut self, layout: PlaneLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the plane layout after validating it.
    pub fn try_layout(self, layout: PlaneLayout) -> Result<Self, ConfigError> {
        layout.validate()?;
        Ok(self.layout(layout))
    }

    /// Set the theme used by the plot.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Start with a function already plotted.
    pub fn function(mut self, function: Function) -> Self {
        self.function = Some(function);
        self
    }

    /// Build the plot.
    pub fn build(self) -> Plot {
        Plot {
            layout: self.layout,
            theme: self.theme,
            function: self.function,
            integrate_pending: false,
        }
    }
}
