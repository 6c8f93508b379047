//! RangeFilter CLI entry point.

fn main() {
    rangefilter_cli::run();
}
