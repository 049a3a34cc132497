//! Simple line-based CLI output utilities.

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

/// Print a section header.
///
/// ```text
/// AAPL
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
}

/// Print a status line.
///
/// ```text
///   ✗ Lookup failed: Invalid stock symbol
/// ```
pub fn print_step_line(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

/// Print a toast line to stderr so it never lands in piped output.
pub fn print_toast(line: &str) {
    eprintln!("{}", line);
}

/// Print a boxed error panel.
///
/// ```text
/// ┌ Error ─────────────────────────────────────────────────────
/// │ Rate limit exceeded. Please wait a moment and try again.
/// └────────────────────────────────────────────────────────────
/// ```
pub fn print_error_panel(message: &str) {
    for line in error_panel_lines(message) {
        println!("{}", line);
    }
}

pub fn error_panel_lines(message: &str) -> Vec<String> {
    let title = "┌ Error ";
    let mut lines = vec![format!(
        "{}{}",
        title,
        "─".repeat(LINE_WIDTH.saturating_sub(title.chars().count()))
    )];
    lines.extend(message.lines().map(|l| format!("│ {}", l)));
    lines.push(format!("└{}", "─".repeat(LINE_WIDTH - 1)));
    lines
}
