//! HUD text: running score and banners

use super::Surface;
use crate::sim::{Banner, GameState};

const FONT_SCORE: &str = "40px Helvetica";
const FONT_SCORE_BOLD: &str = "bold 40px Helvetica";
const FONT_SMALL: &str = "lighter 30px Helvetica";
const FONT_TITLE: &str = "bold 85px Helvetica";
const FONT_BANNER: &str = "bold 75px Helvetica";

const WHITE: &str = "#ffffff";
const SUN: &str = "#FDFDD9";
const BLUSH: &str = "#FFE1E1";

/// One styled line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub font: &'static str,
    pub color: &'static str,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl TextLine {
    fn new(font: &'static str, color: &'static str, text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            font,
            color,
            text: text.into(),
            x,
            y,
        }
    }
}

fn corner_score(font: &'static str, color: &'static str, score: u64) -> TextLine {
    TextLine::new(font, color, score.to_string(), 5.0, 30.0)
}

fn final_score(color: &'static str, score: u64) -> TextLine {
    TextLine::new(FONT_SMALL, color, format!("SCORE: {score}"), 400.0, 175.0)
}

fn press_space(color: &'static str) -> TextLine {
    TextLine::new(FONT_SMALL, color, "PRESS SPACE BAR", 375.0, 400.0)
}

/// Lines to draw for the current state, in draw order
pub fn hud_lines(state: &GameState) -> Vec<TextLine> {
    match state.banner {
        Some(Banner::GameOver { score }) => vec![
            final_score(WHITE, score),
            TextLine::new(FONT_TITLE, WHITE, "G A M E   O V E R", 140.0, 300.0),
            press_space(WHITE),
        ],
        Some(Banner::Win { score }) => vec![
            final_score(SUN, score),
            TextLine::new(FONT_TITLE, SUN, "Y O U   W I N", 225.0, 300.0),
            press_space(SUN),
        ],
        Some(Banner::Bonus) => vec![
            TextLine::new(FONT_BANNER, SUN, "B O N U S", 345.0, 300.0),
            corner_score(FONT_SCORE_BOLD, SUN, state.score),
        ],
        Some(Banner::NextLevel { score }) => vec![
            final_score(BLUSH, score),
            TextLine::new(FONT_BANNER, BLUSH, "NEXT LEVEL", 305.0, 300.0),
            corner_score(FONT_SCORE, WHITE, state.score),
        ],
        Some(Banner::Boss) => vec![
            TextLine::new(FONT_BANNER, BLUSH, "B O S S", 370.0, 300.0),
            corner_score(FONT_SCORE, WHITE, state.score),
        ],
        None => vec![corner_score(FONT_SCORE, WHITE, state.score)],
    }
}

pub fn draw_hud<S: Surface>(surface: &mut S, state: &GameState) {
    for line in hud_lines(state) {
        surface.set_font(line.font);
        surface.set_fill_style(line.color);
        surface.fill_text(&line.text, line.x, line.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BANNER_DURATION_MS;
    use crate::renderer::tests::RecordingSurface;

    #[test]
    fn test_plain_score() {
        let mut state = GameState::new(1).unwrap();
        state.score = 12_345;
        let lines = hud_lines(&state);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "12345");
        assert_eq!((lines[0].x, lines[0].y), (5.0, 30.0));
    }

    #[test]
    fn test_game_over_shows_final_score() {
        let mut state = GameState::new(1).unwrap();
        state.show_banner(Banner::GameOver { score: 8_000 }, BANNER_DURATION_MS);
        let texts: Vec<String> = hud_lines(&state).into_iter().map(|l| l.text).collect();
        assert_eq!(
            texts,
            vec!["SCORE: 8000", "G A M E   O V E R", "PRESS SPACE BAR"]
        );
    }

    #[test]
    fn test_draw_hud_applies_styles() {
        let mut state = GameState::new(1).unwrap();
        state.score = 51_000;
        state.show_banner(Banner::Bonus, BANNER_DURATION_MS);
        let mut surface = RecordingSurface::default();
        draw_hud(&mut surface, &state);
        assert_eq!(
            surface.texts,
            vec![
                ("B O N U S".to_string(), FONT_BANNER.to_string(), SUN.to_string()),
                ("51000".to_string(), FONT_SCORE_BOLD.to_string(), SUN.to_string()),
            ]
        );
    }
}
