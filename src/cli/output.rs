//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, Cell};

/// Create a progress bar over the openings of an exhaustive sweep
pub fn create_sweep_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} openings")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Create a progress bar for sampled games against a named opponent
pub fn create_match_progress(total: u64, opponent: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb.set_message(format!("vs {opponent}"));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid with position digits in the empty cells
pub fn render_with_positions(board: &Board) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let shown = |col: usize| {
                let position = row * 3 + col;
                match board.get(position) {
                    Cell::Empty => (b'0' + position as u8) as char,
                    cell => cell.to_char(),
                }
            };
            format!(" {} | {} | {}", shown(0), shown(1), shown(2))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_positions() {
        let board: Board = "X...O...X".parse().unwrap();
        let rendered = render_with_positions(&board);
        assert_eq!(
            rendered,
            " X | 1 | 2\n---+---+---\n 3 | O | 5\n---+---+---\n 6 | 7 | X"
        );
    }
}
