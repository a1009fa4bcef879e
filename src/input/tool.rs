//! Drawing tool selection.

use crate::draw::PaintMode;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. The active tool decides what a
/// pointer drag does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    Freehand,
    /// Freehand drawing in the background colour
    Eraser,
    /// Straight line locked to the row the drag started on
    HorizontalLine,
    /// Straight line locked to the column the drag started on
    VerticalLine,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Solid rectangle from corner to corner
    FilledRectangle,
    /// Circle outline centred on the press point
    Circle,
    /// Solid circle centred on the press point
    FilledCircle,
    /// Click to place a text annotation
    Text,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 9] = [
        Tool::Freehand,
        Tool::Eraser,
        Tool::HorizontalLine,
        Tool::VerticalLine,
        Tool::Rectangle,
        Tool::FilledRectangle,
        Tool::Circle,
        Tool::FilledCircle,
        Tool::Text,
    ];

    /// Shape tools redraw their preview over a pre-stroke snapshot.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Tool::Rectangle | Tool::FilledRectangle | Tool::Circle | Tool::FilledCircle
        )
    }

    /// Outline or fill, for shape tools.
    pub fn paint_mode(self) -> Option<PaintMode> {
        match self {
            Tool::Rectangle | Tool::Circle => Some(PaintMode::Stroke),
            Tool::FilledRectangle | Tool::FilledCircle => Some(PaintMode::Fill),
            _ => None,
        }
    }

    /// Human-readable name for status output.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Freehand => "Brush",
            Tool::Eraser => "Eraser",
            Tool::HorizontalLine => "Horizontal line",
            Tool::VerticalLine => "Vertical line",
            Tool::Rectangle => "Rectangle",
            Tool::FilledRectangle => "Filled rectangle",
            Tool::Circle => "Circle",
            Tool::FilledCircle => "Filled circle",
            Tool::Text => "Text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_box_and_round_tools_are_shapes() {
        let shapes: Vec<Tool> = Tool::ALL.into_iter().filter(|t| t.is_shape()).collect();
        assert_eq!(
            shapes,
            vec![
                Tool::Rectangle,
                Tool::FilledRectangle,
                Tool::Circle,
                Tool::FilledCircle
            ]
        );
    }

    #[test]
    fn paint_mode_matches_fill_variants() {
        assert_eq!(Tool::Circle.paint_mode(), Some(PaintMode::Stroke));
        assert_eq!(Tool::FilledRectangle.paint_mode(), Some(PaintMode::Fill));
        assert_eq!(Tool::Freehand.paint_mode(), None);
    }
}
