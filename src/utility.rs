use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Logs to stderr, filtered by `RUST_LOG` and `warn` by default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension == "txt")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::has_txt_extension;

    #[test]
    fn accepts_only_txt_files() {
        assert!(has_txt_extension(Path::new("graph.txt")));
        assert!(has_txt_extension(Path::new("dir/graph.txt")));
        assert!(!has_txt_extension(Path::new("graph.csv")));
        assert!(!has_txt_extension(Path::new("graph")));
        assert!(!has_txt_extension(Path::new(".txt")));
    }
}
