use crate::evaluation::MeanSample;
use crate::session::ExperimentRecord;

/// Mean shown before any run has produced a sample.
pub const INITIAL_DISPLAY_MEAN: f64 = 0.5;

const GAUGE_WIDTH: usize = 20;

fn gauge(mean: f64) -> String {
    let filled = (mean.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(GAUGE_WIDTH);
    for i in 0..GAUGE_WIDTH {
        bar.push(if i < filled { '#' } else { ' ' });
    }
    bar
}

/// One line of the live mean display: trial number, mean, and a coarse gauge.
pub fn progress_line(sample: &MeanSample) -> String {
    format!(
        "{:>6}  {:.6}  [{}]",
        sample.trial_no,
        sample.mean,
        gauge(sample.mean)
    )
}

/// The display line shown before the first sample of the session.
pub fn seed_line() -> String {
    format!(
        "{:>6}  {:.6}  [{}]",
        "-",
        INITIAL_DISPLAY_MEAN,
        gauge(INITIAL_DISPLAY_MEAN)
    )
}

/// History table in the `{no, iterations, mean}` layout.
pub fn history_table(records: &[ExperimentRecord]) -> String {
    if records.is_empty() {
        return "(no experiments recorded yet)\n".to_string();
    }

    let mut out = String::from("  no  iterations      mean\n");
    for r in records {
        out.push_str(&format!(
            "{:>4}  {:>10}  {:.6}\n",
            r.id, r.trial_count, r.mean
        ));
    }
    out
}
