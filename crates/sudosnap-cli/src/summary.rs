use console::Style;

use sudosnap_core::frame::BoundingBox;
use sudosnap_core::grid::PuzzleGrid;
use sudosnap_core::pipeline::RunReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
        }
    }
}

pub fn print_extract_summary(bbox: &BoundingBox, grid: &PuzzleGrid) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Extracted Board"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();
    print_board_line(&s, bbox);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Givens"),
        s.value.apply_to(grid.given_count())
    );
    println!();
    print_grid(grid);
}

pub fn print_run_summary(report: &RunReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Pipeline Result"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();
    print_board_line(&s, &report.bounding_box);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Givens"),
        s.value.apply_to(report.unsolved.given_count())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Entered"),
        s.value.apply_to(report.entered)
    );
    println!();

    println!("  {}", s.header.apply_to("Solution"));
    print_grid(&report.solved);
    println!();

    println!("  {}", s.header.apply_to("Timings"));
    for timing in &report.timings {
        println!(
            "    {:<20}{}",
            s.label.apply_to(timing.stage.to_string()),
            s.value.apply_to(format!("{:.1?}", timing.duration))
        );
    }
    println!();
}

fn print_board_line(s: &Styles, bbox: &BoundingBox) {
    println!(
        "  {:<14}{}",
        s.label.apply_to("Board"),
        s.value.apply_to(format!(
            "{}x{} at ({}, {})",
            bbox.width, bbox.height, bbox.x, bbox.y
        ))
    );
}

pub fn print_grid(grid: &PuzzleGrid) {
    for line in grid.to_string().lines() {
        println!("    {line}");
    }
}
