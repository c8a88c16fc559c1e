use std::env;

use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use strum::IntoEnumIterator;

use eigengraph::{
    Coefficients, Family, Function, PlaneLayout, Plot, PlotCommand, RenderCommand, catalog,
    describe,
};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    // An optional JSON layout file may be passed as the first argument.
    let layout = match env::args().nth(1) {
        Some(path) => PlaneLayout::from_path(path).unwrap(),
        None => PlaneLayout::default(),
    };
    let mut plot = Plot::builder().layout(layout).build();
    let coefficients = Coefficients::new(2, 1, -1, 1);

    for family in Family::iter() {
        for label in catalog(family) {
            let function = match Function::from_selection(family, &label, coefficients) {
                Ok(function) => function,
                Err(err) => {
                    info!("{err}");
                    continue;
                }
            };
            println!("{}", describe(&function));
            plot.apply(PlotCommand::Select(function));
            plot.apply(PlotCommand::Integrate);
            for command in plot.frame().commands() {
                match command {
                    RenderCommand::Curve { points, .. } => {
                        let first = points.first().unwrap();
                        let last = points.last().unwrap();
                        println!(
                            "  curve: {} points from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                            points.len(),
                            first.x,
                            first.y,
                            last.x,
                            last.y
                        );
                    }
                    RenderCommand::Rects { rects, .. } => {
                        println!("  integral: {} rectangles", rects.len());
                    }
                    _ => {}
                }
            }
        }
    }
}
