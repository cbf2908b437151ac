use std::io::Write;

use crate::game::{Board, Rotation};

/// Something that shows the board after it changes. The game never reads
/// anything back from it.
pub trait Renderer {
    fn render(&mut self, board: &Board, rotation: Rotation);
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board, _rotation: Rotation) {}
}

/// Writes [`board_to_string`] output to any writer.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board, rotation: Rotation) {
        // Display only; a closed stdout must not stop the game.
        let _ = writeln!(self.out, "{}", board_to_string(board, rotation));
        let _ = self.out.flush();
    }
}

/// Plain-text board, top row first, gravity pointing down the page:
///
/// ```text
/// Original orientation (gravity pulls down)
/// . . .
/// X O .
/// 1 2 3
/// ```
pub fn board_to_string(board: &Board, rotation: Rotation) -> String {
    let mut lines = Vec::with_capacity(board.rows() + 2);
    lines.push(format!("{} (gravity pulls down)", rotation.label()));

    for row in (0..board.rows()).rev() {
        let cells: Vec<String> = (0..board.cols())
            .map(|col| board.get(row, col).symbol().to_string())
            .collect();
        lines.push(cells.join(" "));
    }

    let numbers: Vec<String> = (1..=board.cols()).map(|n| n.to_string()).collect();
    lines.push(numbers.join(" "));

    lines.join("\n")
}
