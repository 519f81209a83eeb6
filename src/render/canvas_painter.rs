//! Überträgt eine `DrawList` auf einen egui-Painter (Raster-Canvas).

use crate::shared::{DrawCommand, DrawList, Rgba};
use glam::DVec2;

/// Schriftgröße der Canvas-Beschriftungen.
const CAPTION_FONT_SIZE: f32 = 14.0;

/// Zeichnet alle Anweisungen in `rect`.
///
/// Die Liste ist in Canvas-Pixeln definiert; weicht `rect` von `list.size` ab,
/// wird einheitlich skaliert. Alles außerhalb von `rect` wird abgeschnitten.
pub fn paint_draw_list(painter: &egui::Painter, rect: egui::Rect, list: &DrawList) {
    let painter = painter.with_clip_rect(rect);
    let scale = if list.size.x > 0.0 && list.size.y > 0.0 {
        (rect.width() as f64 / list.size.x).min(rect.height() as f64 / list.size.y)
    } else {
        1.0
    };
    let to_pos = |p: DVec2| -> egui::Pos2 {
        egui::pos2(
            rect.min.x + (p.x * scale) as f32,
            rect.min.y + (p.y * scale) as f32,
        )
    };

    for command in list.commands() {
        match command {
            DrawCommand::Clear { color } => {
                painter.rect_filled(rect, 0.0, to_color32(*color));
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
                ..
            } => {
                let stroke = egui::Stroke::new(*width, to_color32(*color));
                match points.as_slice() {
                    [] => {}
                    [single] => {
                        painter.circle_filled(to_pos(*single), *width, stroke.color);
                    }
                    _ => {
                        let points: Vec<egui::Pos2> = points.iter().map(|p| to_pos(*p)).collect();
                        painter.add(egui::Shape::line(points, stroke));
                    }
                }
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
                ..
            } => {
                painter.line_segment(
                    [to_pos(*from), to_pos(*to)],
                    egui::Stroke::new(*width, to_color32(*color)),
                );
            }
            DrawCommand::Marker {
                center,
                radius,
                color,
                ..
            } => {
                painter.circle_filled(to_pos(*center), *radius, to_color32(*color));
            }
            DrawCommand::Text {
                position,
                text,
                color,
            } => {
                painter.text(
                    to_pos(*position),
                    egui::Align2::LEFT_TOP,
                    text,
                    egui::FontId::proportional(CAPTION_FONT_SIZE),
                    to_color32(*color),
                );
            }
        }
    }
}

/// RGBA `[0, 1]` → `Color32`.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_clamps_and_rounds() {
        assert_eq!(
            to_color32([1.0, 0.0, 0.0, 1.0]),
            egui::Color32::from_rgb(255, 0, 0)
        );
        assert_eq!(
            to_color32([2.0, -1.0, 0.5, 1.0]),
            egui::Color32::from_rgb(255, 0, 128)
        );
    }

    #[test]
    fn test_paints_single_point_run_and_polyline() {
        use crate::core::Branch;

        let mut list = DrawList::new(DVec2::new(600.0, 600.0));
        list.push(DrawCommand::Clear {
            color: [1.0, 1.0, 1.0, 1.0],
        });
        for points in [
            vec![],
            vec![DVec2::new(300.0, 300.0)],
            vec![DVec2::new(0.0, 0.0), DVec2::new(600.0, 600.0)],
        ] {
            list.push(DrawCommand::Polyline {
                branch: Branch::Upper,
                points,
                color: [0.0, 0.0, 1.0, 1.0],
                width: 1.0,
            });
        }

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(300.0, 300.0));
            paint_draw_list(&painter, rect, &list);
        });

        // Hintergrund, Einzelpunkt und Linienzug; der leere Lauf erzeugt nichts
        assert_eq!(output.shapes.len(), 3);
    }
}
