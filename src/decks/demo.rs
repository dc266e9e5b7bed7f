//! A simple three-slide demo deck.

use crate::common::{Emu, RgbColor};
use crate::error::Result;
use crate::pptx::{Alignment, AutoShapeType, Presentation, Shape, Slide};

pub const DEFAULT_FILE_NAME: &str = "test-presentation.pptx";

const DARK_BLUE: RgbColor = RgbColor::new(0x1C, 0x28, 0x33);
const MID_BLUE: RgbColor = RgbColor::new(0x2E, 0x40, 0x53);
const SILVER: RgbColor = RgbColor::new(0xAA, 0xB7, 0xB8);
const OFF_WHITE: RgbColor = RgbColor::new(0xF4, 0xF6, 0xF6);
const WHITE: RgbColor = RgbColor::WHITE;

const SLIDE_WIDTH: f64 = 13.33;
const SLIDE_HEIGHT: f64 = 7.5;

pub(crate) const BULLETS: [&str; 5] = [
    "This is the first bullet point \u{2014} introduce your main idea here.",
    "This is the second bullet point \u{2014} elaborate with supporting details.",
    "This is the third bullet point \u{2014} provide evidence or examples.",
    "This is the fourth bullet point \u{2014} highlight any key takeaways.",
    "This is the fifth bullet point \u{2014} wrap up the section's argument.",
];

/// Top edge of the bullet row at `index`, in inches.
pub(crate) fn bullet_top(index: usize) -> f64 {
    1.7 + index as f64 * 0.9
}

/// Filled rectangle without an outline; coordinates in inches.
fn add_rect(slide: &mut Slide, l: f64, t: f64, w: f64, h: f64, color: RgbColor) -> &mut Shape {
    let shape = slide.add_shape(
        AutoShapeType::Rectangle,
        Emu::inches(l),
        Emu::inches(t),
        Emu::inches(w),
        Emu::inches(h),
    );
    shape.set_fill(color).clear_line();
    shape
}

struct TextStyle {
    size: f64,
    bold: bool,
    color: RgbColor,
    align: Alignment,
}

impl TextStyle {
    fn new(size: f64, color: RgbColor) -> Self {
        Self {
            size,
            bold: false,
            color,
            align: Alignment::Left,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn centered(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }
}

/// Wrapping text box holding a single run.
fn add_text_box<'a>(
    slide: &'a mut Slide,
    (l, t, w, h): (f64, f64, f64, f64),
    text: &str,
    style: TextStyle,
) -> &'a mut Shape {
    let shape = slide.add_textbox(
        Emu::inches(l),
        Emu::inches(t),
        Emu::inches(w),
        Emu::inches(h),
    );
    let tf = shape.text_frame_mut();
    tf.set_word_wrap(true);
    let p = tf.paragraph_mut(0);
    p.set_alignment(style.align);
    p.add_run(text)
        .font_mut()
        .size(style.size)
        .bold(style.bold)
        .color(style.color);
    shape
}

fn title_slide(slide: &mut Slide) {
    slide.set_background(DARK_BLUE);

    // Left accent bar and bottom band
    add_rect(slide, 0.0, 0.0, 0.35, SLIDE_HEIGHT, MID_BLUE);
    add_rect(slide, 0.35, 6.2, 12.98, 1.3, MID_BLUE);

    add_text_box(
        slide,
        (1.0, 2.2, 11.0, 1.5),
        "Test Presentation",
        TextStyle::new(54.0, OFF_WHITE).bold(),
    );
    add_text_box(
        slide,
        (1.0, 3.9, 11.0, 0.9),
        "A Simple Three-Slide Demo",
        TextStyle::new(24.0, SILVER),
    );
    add_text_box(
        slide,
        (1.0, 6.35, 6.0, 0.6),
        "February 2026",
        TextStyle::new(14.0, SILVER),
    );
}

fn key_points_slide(slide: &mut Slide) {
    slide.set_background(OFF_WHITE);

    add_rect(slide, 0.0, 0.0, SLIDE_WIDTH, 1.4, DARK_BLUE);
    add_rect(slide, 0.0, 1.4, 0.35, 6.1, MID_BLUE);

    add_text_box(
        slide,
        (0.55, 0.25, 12.0, 0.9),
        "Key Points",
        TextStyle::new(36.0, OFF_WHITE).bold(),
    );

    for (i, text) in BULLETS.iter().enumerate() {
        let top = bullet_top(i);
        add_rect(slide, 0.65, top + 0.22, 0.18, 0.18, MID_BLUE);
        add_text_box(
            slide,
            (1.05, top, 11.8, 0.8),
            text,
            TextStyle::new(18.0, DARK_BLUE),
        );
    }
}

fn closing_slide(slide: &mut Slide) {
    slide.set_background(DARK_BLUE);

    add_rect(slide, 3.0, 2.5, 7.33, 2.5, MID_BLUE);

    add_text_box(
        slide,
        (3.0, 2.7, 7.33, 1.1),
        "Thank You",
        TextStyle::new(52.0, WHITE).bold().centered(),
    );
    add_text_box(
        slide,
        (3.0, 3.9, 7.33, 0.8),
        "Questions? Reach out any time.",
        TextStyle::new(20.0, SILVER).centered(),
    );
    add_text_box(
        slide,
        (0.0, 6.8, SLIDE_WIDTH, 0.5),
        "Test Presentation  |  February 2026",
        TextStyle::new(12.0, SILVER).centered(),
    );
}

/// Build the demo deck: title, key points and closing slides.
pub fn build() -> Result<Presentation> {
    let mut pres = Presentation::with_size(Emu::inches(SLIDE_WIDTH), Emu::inches(SLIDE_HEIGHT));
    pres.properties_mut().title = Some("Test Presentation".to_string());

    title_slide(pres.add_slide());
    key_points_slide(pres.add_slide());
    closing_slide(pres.add_slide());

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::{AutoSize, ShapeKind};

    #[test]
    fn test_slide_size_and_count() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 3);
        assert_eq!(pres.slide_width().get(), 12188952);
        assert_eq!(pres.slide_height().get(), 6858000);
    }

    #[test]
    fn test_shape_counts() {
        let pres = build().unwrap();
        let counts: Vec<usize> = pres.slides().iter().map(Slide::shape_count).collect();
        assert_eq!(counts, vec![5, 13, 4]);
    }

    #[test]
    fn test_bullet_rows_step_down() {
        assert_eq!(bullet_top(0), 1.7);
        assert!((bullet_top(4) - 5.3).abs() < 1e-9);

        let pres = build().unwrap();
        let slide = pres.slide(1).unwrap();
        let markers: Vec<&Shape> = slide
            .shapes()
            .iter()
            .filter(|s| s.width() == Emu::inches(0.18))
            .collect();
        assert_eq!(markers.len(), BULLETS.len());
        for (i, marker) in markers.iter().enumerate() {
            assert_eq!(marker.top(), Emu::inches(bullet_top(i) + 0.22));
        }
    }

    #[test]
    fn test_text_boxes_wrap_and_carry_text() {
        let pres = build().unwrap();
        let closing = pres.slide(2).unwrap();
        let texts: Vec<String> = closing
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::TextBox)
            .filter_map(|s| s.text_frame())
            .inspect(|tf| {
                assert_eq!(tf.word_wrap(), Some(true));
                assert_eq!(tf.auto_size(), Some(AutoSize::ShapeToFitText));
            })
            .map(|tf| tf.text())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Thank You",
                "Questions? Reach out any time.",
                "Test Presentation  |  February 2026"
            ]
        );
        assert_eq!(closing.background(), Some(DARK_BLUE));

        for slide in pres.slides() {
            for shape in slide.shapes().iter().filter(|s| s.kind() == ShapeKind::TextBox) {
                let tf = shape.text_frame().unwrap();
                assert_eq!(tf.auto_size(), Some(AutoSize::ShapeToFitText));
            }
        }
    }
}
