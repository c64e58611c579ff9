//! Rating Demo
//!
//! Hosts two rating widgets headlessly:
//! - one configured in code (20px stars, unlimited rating, tap and drag)
//! - one described by a TOML settings block
//!
//! Pointer input is simulated, the reveal animation is ticked at 60fps, and
//! the final frame is printed as recorded draw commands.
//!
//! Run with: RUST_LOG=debug cargo run -p starry_rating --example rating_demo

use anyhow::Result;
use starry_core::{DrawCommand, RecordingContext};
use starry_rating::prelude::*;

const STAR_WIDTH: f32 = 20.0;
const NORMAL_STAR: ImageId = ImageId(1);
const SELECTED_STAR: ImageId = ImageId(2);
const FRAME_MS: f32 = 1000.0 / 60.0;

const STORED_SETTINGS: &str = r#"
count = 5
star_width = 24.0
star_height = 24.0
current_score = 4.0
rating_type = "half"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut widget = build_widget()?;
    widget.set_listener(|score: f32| tracing::info!(score, "score changed"));

    // A tap near the end of the third star, then a drag back toward the start
    widget.handle_event(&PointerEvent::click(70.0, 10.0));
    settle(&mut widget);
    for x in [60.0, 48.0, 37.5, 31.0] {
        widget.handle_event(&PointerEvent::drag(x, 10.0));
        settle(&mut widget);
    }
    print_frame("code", &widget);

    let settings = RatingSettings::from_toml_str(STORED_SETTINGS)?;
    let mut stored = RatingWidget::from_settings(Rect::ZERO, &settings)?;
    stored.set_frame(Rect::new(0.0, 0.0, stored.total_width(), 24.0));
    stored.set_normal_image(Some(NORMAL_STAR));
    stored.set_selected_image(Some(SELECTED_STAR));
    settle(&mut stored);
    print_frame("settings", &stored);

    Ok(())
}

fn build_widget() -> Result<RatingWidget> {
    let mut widget = RatingWidget::new(Rect::ZERO);
    widget.set_star_size(Size::square(STAR_WIDTH))?;
    widget.set_normal_image(Some(NORMAL_STAR));
    widget.set_selected_image(Some(SELECTED_STAR));
    widget.set_current_score(2.0)?;
    widget.set_touch_enabled(true);
    widget.set_slide_enabled(true);
    widget.set_rating_type(RatingType::Unlimited);
    widget.set_frame(Rect::new(0.0, 0.0, widget.total_width(), STAR_WIDTH));
    Ok(widget)
}

fn settle(widget: &mut RatingWidget) {
    let mut frames = 0;
    while widget.tick(FRAME_MS) {
        frames += 1;
    }
    tracing::debug!(frames, width = widget.reveal_width(), "reveal settled");
}

fn print_frame(label: &str, widget: &RatingWidget) {
    let frame = widget.frame();
    let mut ctx = RecordingContext::new();
    widget.render(&mut ctx);

    println!(
        "[{label}] score {:.2} of {:.2} ({} stars, {:?}) in {}x{} frame",
        widget.current_score(),
        widget.max_score(),
        widget.count(),
        widget.rating_type(),
        frame.width(),
        frame.height()
    );
    for command in ctx.commands() {
        match command {
            DrawCommand::DrawImage { image, rect, .. } => println!(
                "  image {:>2} at ({:6.1}, {:5.1}) {}x{}",
                image.0,
                rect.x(),
                rect.y(),
                rect.width(),
                rect.height()
            ),
            DrawCommand::PushClip(shape) => {
                println!("  clip to width {:.1}", shape.bounds().width())
            }
            DrawCommand::PopClip => println!("  end clip"),
        }
    }
}
