//! Debug overlay: clock, animatronic and camera listings.

use glam::Vec2;
use office_rules::OfficeState;

use crate::collaborators::{Canvas, Color, GameClock, TextStyle};

const DEBUG_FONT: &str = "default";
const HEADING_X: f32 = 994.0;
const ROW_X: f32 = 1038.0;
const ROW_HEIGHT: f32 = 22.0;
const ANIMATRONICS_Y: f32 = 88.0;

pub fn draw_overlay<E>(state: &OfficeState, engine: &mut E)
where
    E: Canvas + GameClock + ?Sized,
{
    let style = TextStyle::new(DEBUG_FONT, 22, Color::WHITE);
    let clock = engine.clock();

    engine.draw_text(&style, "Time", Vec2::new(HEADING_X, 0.0));
    engine.draw_text(&style, &format!("Seconds: {}", clock.seconds), Vec2::new(ROW_X, ROW_HEIGHT));
    engine.draw_text(&style, &format!("Minutes: {}", clock.minutes), Vec2::new(ROW_X, 2.0 * ROW_HEIGHT));

    engine.draw_text(&style, "Animatronics", Vec2::new(HEADING_X, ANIMATRONICS_Y));
    let mut y = ANIMATRONICS_Y;
    for name in &state.animatronics {
        y += ROW_HEIGHT;
        engine.draw_text(&style, name, Vec2::new(ROW_X, y));
    }

    y += 2.0 * ROW_HEIGHT;
    engine.draw_text(&style, "Cameras", Vec2::new(HEADING_X, y));
    for camera in &state.cameras {
        y += ROW_HEIGHT;
        engine.draw_text(&style, camera, Vec2::new(ROW_X, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingEngine};
    use office_rules::ClockTime;

    fn position_of(engine: &RecordingEngine, text: &str) -> Option<Vec2> {
        engine.draws.iter().find_map(|draw| match draw {
            DrawCall::Text { content, position, .. } if content == text => Some(*position),
            _ => None,
        })
    }

    #[test]
    fn test_overlay_layout() {
        let mut engine = RecordingEngine::new();
        engine.clock = ClockTime::new(1, 7, 42);
        let state = OfficeState {
            animatronics: vec!["Freddy".into(), "Bonnie".into()],
            cameras: vec!["1A".into(), "1B".into()],
            ..Default::default()
        };

        draw_overlay(&state, &mut engine);

        assert_eq!(position_of(&engine, "Time"), Some(Vec2::new(994.0, 0.0)));
        assert_eq!(position_of(&engine, "Seconds: 42"), Some(Vec2::new(1038.0, 22.0)));
        assert_eq!(position_of(&engine, "Minutes: 7"), Some(Vec2::new(1038.0, 44.0)));
        assert_eq!(position_of(&engine, "Animatronics"), Some(Vec2::new(994.0, 88.0)));
        assert_eq!(position_of(&engine, "Freddy"), Some(Vec2::new(1038.0, 110.0)));
        assert_eq!(position_of(&engine, "Bonnie"), Some(Vec2::new(1038.0, 132.0)));
        assert_eq!(position_of(&engine, "Cameras"), Some(Vec2::new(994.0, 176.0)));
        assert_eq!(position_of(&engine, "1A"), Some(Vec2::new(1038.0, 198.0)));
        assert_eq!(position_of(&engine, "1B"), Some(Vec2::new(1038.0, 220.0)));
    }

    #[test]
    fn test_cameras_follow_heading_without_animatronics() {
        let mut engine = RecordingEngine::new();
        let state = OfficeState {
            cameras: vec!["1A".into()],
            ..Default::default()
        };

        draw_overlay(&state, &mut engine);

        assert_eq!(position_of(&engine, "Cameras"), Some(Vec2::new(994.0, 132.0)));
        assert_eq!(position_of(&engine, "1A"), Some(Vec2::new(1038.0, 154.0)));
    }
}
