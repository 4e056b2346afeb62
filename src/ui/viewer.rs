/// Image view and rating bar widgets

use iced::widget::{container, image, text};
use iced::{Background, Color, ContentFit, Element, Length};

use crate::media::DecodedImage;
use crate::rater::Verdict;
use crate::state::rating::RatingState;
use crate::Message;

/// Neutral background while idle or waiting for the rater
const NEUTRAL: Color = Color::from_rgb(0.8, 0.8, 0.8);
/// Safe verdict background (#00ff00)
const SAFE: Color = Color::from_rgb(0.0, 1.0, 0.0);
/// Suspicious verdict background (#ff0000)
const SUSPICIOUS: Color = Color::from_rgb(1.0, 0.0, 0.0);
/// Error verdict background (#777777)
const ERROR: Color = Color::from_rgb(0.467, 0.467, 0.467);

/// The image area: the current image scaled to fit while preserving its
/// aspect ratio, or a placeholder when nothing is loaded. The layout engine
/// recomputes the fit on every window resize.
pub fn image_view(current: Option<&DecodedImage>) -> Element<'static, Message> {
    match current {
        Some(img) => image(img.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("No image loaded").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    }
}

/// The rating bar: a full-width colored strip mirroring the rating state
pub fn rating_bar(state: &RatingState) -> Element<'static, Message> {
    let (label, color) = match state {
        RatingState::Idle => (String::new(), NEUTRAL),
        RatingState::Pending(_) => ("Rating ...".to_string(), NEUTRAL),
        RatingState::Done(_, verdict) => (verdict.to_string(), verdict_color(verdict)),
    };

    container(text(label).size(16).color(Color::BLACK))
        .width(Length::Fill)
        .padding(8)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(color)),
            ..container::Style::default()
        })
        .into()
}

/// Background color for a completed verdict
fn verdict_color(verdict: &Verdict) -> Color {
    match verdict {
        Verdict::Safe => SAFE,
        Verdict::Suspicious => SUSPICIOUS,
        Verdict::Error(_) => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn contain_fit_preserves_aspect_ratio() {
        // A 4:1 image must stay 4:1 inside any window shape
        let content = Size::new(64.0, 16.0);
        let windows = [
            Size::new(300.0, 300.0),
            Size::new(120.0, 500.0),
            Size::new(1000.0, 40.0),
        ];

        for bounds in windows {
            let fitted = ContentFit::Contain.fit(content, bounds);
            assert!((fitted.width / fitted.height - 4.0).abs() < 1e-3);
            assert!(fitted.width <= bounds.width + 1e-3);
            assert!(fitted.height <= bounds.height + 1e-3);
        }
    }

    #[test]
    fn verdict_colors_are_distinct() {
        let colors = [
            verdict_color(&Verdict::Safe),
            verdict_color(&Verdict::Suspicious),
            verdict_color(&Verdict::Error(String::new())),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
