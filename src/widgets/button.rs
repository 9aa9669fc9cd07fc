//! Button widget: a padded, themed label that tracks its own press state.
//!
//! The button sizes itself to its label plus padding, and paints a rounded
//! frame in the [`Theme`] colors (inverted while pressed). Make it clickable
//! from its content callback with
//! [`on_click`](crate::element::ElementMut::on_click).

use super::theme::{Density, Fonts, Theme};
use crate::element::{ElementId, ElementMut};
use crate::error::Result;
use crate::event::{InternalState, State};
use crate::geometry::{Point, Size, Spacing};
use crate::layout::{LayoutCx, Padding};
use crate::render::{Canvas, Color, RenderCx, TextMeasurer};

/// Padding around the label, in density-independent units.
pub const BUTTON_PADDING: Spacing = Spacing::new(8.0, 4.0, 8.0, 4.0);

/// What the button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonModel {
    pub label: String,
}

impl ButtonModel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Label metrics computed during layout and used to center the label when
/// drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonTextState {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
}

impl ElementMut<'_> {
    /// Create a button child.
    ///
    /// `content` runs against the button after its own components are
    /// attached, so it can add behaviors such as a click handler.
    ///
    /// Reads the [`Theme`], [`Density`] and [`Fonts`] providers.
    pub fn button(
        &mut self,
        model: ButtonModel,
        state: State,
        content: impl FnOnce(&mut ElementMut<'_>),
    ) -> ElementId {
        self.create_child(|button| {
            button
                .add_component(model)
                .add_component(InternalState::new(state))
                .add_component(ButtonTextState::default())
                .padding(BUTTON_PADDING)
                .render(draw_button)
                .layout(measure_button);
            content(button);
        })
    }
}

fn measure_button(cx: &mut LayoutCx<'_>, _constraint: Size) -> Result<Size> {
    let density = cx.provider::<Density>()?;
    let theme = cx.provider::<Theme>()?;
    let fonts = cx.provider::<Fonts>()?;
    let padding = density.px_spacing(cx.component::<Padding>()?.spacing);

    let metrics = fonts.measure_text(
        &cx.component::<ButtonModel>()?.label,
        &theme.text_style(&density),
    );
    *cx.component_mut::<ButtonTextState>()? = ButtonTextState {
        width: metrics.width,
        height: metrics.height(),
        ascent: metrics.ascent,
    };

    let stroke = if theme.strokes() {
        density.px(theme.stroke_width)
    } else {
        0.0
    };
    Ok(Size::new(
        metrics.width + padding.width() + 2.0 * stroke,
        metrics.height() + padding.height(),
    ))
}

fn draw_button(cx: &mut RenderCx<'_>, canvas: &mut dyn Canvas) -> Result<()> {
    let density = cx.provider::<Density>()?;
    let theme = cx.provider::<Theme>()?;
    let state = *cx.component::<InternalState>()?;
    let text = *cx.component::<ButtonTextState>()?;
    let label = cx.component::<ButtonModel>()?.label.clone();

    let tint = |color: Color| {
        if state.is_pressed() {
            color.complementary()
        } else {
            color
        }
    };
    let pick = |enabled: Color, disabled: Color| {
        tint(if state.is_enabled() { enabled } else { disabled })
    };

    let size = cx.bounds().size();
    let frame = size.to_rect();
    let radius = density.px(theme.corner_radius);

    if theme.fills() {
        cx.paint().color = pick(theme.content_background, theme.content_disabled);
        canvas.fill_round_rect(frame, radius, cx.paint());
    }
    if theme.strokes() {
        let paint = cx.paint();
        paint.color = pick(theme.border, theme.disabled);
        paint.stroke_width = density.px(theme.stroke_width);
        canvas.stroke_round_rect(frame, radius, paint);
    }

    let paint = cx.paint();
    paint.color = pick(theme.text, theme.disabled);
    paint.text = theme.text_style(&density);
    let baseline = Point::new(
        (size.width - text.width) * 0.5,
        (size.height - text.height) * 0.5 + text.ascent,
    );
    canvas.draw_text(&label, baseline, paint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Tree;
    use crate::error::Error;
    use crate::event::{MotionInputPass, OnClickModel, PointerEvent};
    use crate::layout::LayoutPass;
    use crate::render::RenderPass;
    use crate::testing::{FixedTextMeasurer, RecordingCanvas};
    use crate::widgets::ThemeStyle;
    use pretty_assertions::assert_eq;

    fn ui(theme: Theme, density: f32, state: State) -> (Tree, ElementId, ElementId) {
        let mut tree = Tree::new();
        let mut button = Default::default();
        let root = tree.create_root(|e| {
            e.provider(theme)
                .provider(Density::new(density))
                .provider(Fonts::new(FixedTextMeasurer::default()));
            button = e.button(ButtonModel::new("Hello"), state, |b| {
                b.on_click(OnClickModel::default());
            });
        });
        (tree, root, button)
    }

    fn laid_out(theme: Theme, density: f32, state: State) -> (Tree, ElementId, ElementId) {
        let (mut tree, root, button) = ui(theme, density, state);
        LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap();
        (tree, root, button)
    }

    #[test]
    fn sized_to_label_plus_padding() {
        let (tree, _, button) = laid_out(Theme::default(), 1.0, State::Enabled);
        assert_eq!(tree.bounds(button).map(|b| b.size()), Some(Size::new(56.0, 18.0)));
        assert_eq!(
            *tree.component::<ButtonTextState>(button).unwrap(),
            ButtonTextState {
                width: 40.0,
                height: 10.0,
                ascent: 8.0
            }
        );
    }

    #[test]
    fn stroke_widens_the_frame() {
        let theme = Theme::default().with_style(ThemeStyle::FillAndStroke);
        let (tree, _, button) = laid_out(theme, 1.0, State::Enabled);
        assert_eq!(tree.bounds(button).map(|b| b.size()), Some(Size::new(58.0, 18.0)));
    }

    #[test]
    fn density_scales_padding_and_stroke() {
        let theme = Theme::default().with_style(ThemeStyle::Stroke);
        let (tree, _, button) = laid_out(theme, 2.0, State::Enabled);
        // Fixed metrics ignore font size: 40 + 2 * 16 + 2 * 2, 10 + 2 * 8.
        assert_eq!(tree.bounds(button).map(|b| b.size()), Some(Size::new(76.0, 26.0)));
    }

    #[test]
    fn draws_frame_then_centered_label() {
        let (mut tree, root, _) = laid_out(Theme::default(), 1.0, State::Enabled);
        let mut canvas = RecordingCanvas::new();
        RenderPass::run(&mut tree, root, &mut canvas).unwrap();
        insta::assert_snapshot!(canvas.to_string(), @r#"
        fill_round_rect(0, 0, 56, 18, r=4) #6200ee
        draw_text("Hello" at 8, 12) #ffffff
        "#);
    }

    #[test]
    fn pressed_button_inverts_colors() {
        let (mut tree, root, button) = laid_out(Theme::default(), 1.0, State::Enabled);
        let mut pass = MotionInputPass::new();
        pass.dispatch(&mut tree, root, &PointerEvent::down(10.0, 10.0))
            .unwrap();
        assert!(tree.component::<InternalState>(button).unwrap().is_pressed());

        let mut canvas = RecordingCanvas::new();
        RenderPass::run(&mut tree, root, &mut canvas).unwrap();
        insta::assert_snapshot!(canvas.to_string(), @r#"
        fill_round_rect(0, 0, 56, 18, r=4) #9dff11
        draw_text("Hello" at 8, 12) #000000
        "#);
    }

    #[test]
    fn disabled_stroked_button() {
        let theme = Theme::default().with_style(ThemeStyle::FillAndStroke);
        let (mut tree, root, _) = laid_out(theme, 1.0, State::Disabled);
        let mut canvas = RecordingCanvas::new();
        RenderPass::run(&mut tree, root, &mut canvas).unwrap();
        insta::assert_snapshot!(canvas.to_string(), @r#"
        fill_round_rect(0, 0, 58, 18, r=4) #bdbdbd
        stroke_round_rect(0, 0, 58, 18, r=4) #9e9e9e w=1
        draw_text("Hello" at 9, 12) #9e9e9e
        "#);
    }

    #[test]
    fn content_callback_runs_on_the_button() {
        let (tree, _, button) = ui(Theme::default(), 1.0, State::Enabled);
        assert!(tree.component_optional::<OnClickModel>(button).is_some());
        assert_eq!(tree.components(button).unwrap().count::<InternalState>(), 1);
    }

    #[test]
    fn missing_theme_is_an_error() {
        let mut tree = Tree::new();
        let root = tree.create_root(|e| {
            e.provider(Density::default())
                .provider(Fonts::new(FixedTextMeasurer::default()));
            e.button(ButtonModel::new("x"), State::Enabled, |_| {});
        });
        let err = LayoutPass::run(&mut tree, root, Size::UNBOUNDED).unwrap_err();
        assert!(matches!(err, Error::ProviderNotFound { .. }));
    }
}
