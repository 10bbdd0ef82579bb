use super::model::WheelModel;
use super::{
    HUB_RADIUS, KNOB_OFFSET, KNOB_SIZE, NUMERAL_HEIGHT, NUMERAL_INSET, NUMERAL_WIDTH,
    SHADOW_RADIUS,
};
use crate::gui::theme::ThemeColors;
use cairo::{Context, Format, ImageSurface};
use dial::chart::{Chart, Wedge};
use dial::geometry::SEGMENT_ANGLE;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

fn trace_wedge(cr: &Context, wedge: &Wedge, radius: f64) {
    cr.move_to(radius, radius);
    cr.arc(radius, radius, radius, wedge.start, wedge.start + wedge.sweep());
    cr.close_path();
}

fn fill_chart(cr: &Context, chart: &Chart) -> Result<(), cairo::Error> {
    let radius = chart.radius();
    for wedge in chart.wedges() {
        let (r, g, b) = wedge.color.into_format::<f64>().into_components();
        cr.set_source_rgb(r, g, b);
        trace_wedge(cr, wedge, radius);
        cr.fill()?;
    }
    Ok(())
}

/// Rasterizes the static pie once so frames only blit it.
pub fn render_chart(chart: &Chart) -> Option<ImageSurface> {
    let side = chart.size().ceil() as i32;
    let rendered = ImageSurface::create(Format::ARgb32, side, side).and_then(|surface| {
        let cr = Context::new(&surface)?;
        fill_chart(&cr, chart)?;
        drop(cr);
        Ok(surface)
    });

    match rendered {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::warn!("Falling back to vector chart: {}", e);
            None
        }
    }
}

fn draw_chart(cr: &Context, wheel: &WheelModel) -> Result<(), cairo::Error> {
    match &wheel.chart_surface {
        Some(surface) => {
            cr.set_source_surface(surface, 0.0, 0.0)?;
            cr.paint()
        }
        None => fill_chart(cr, &wheel.chart),
    }
}

/// Paints `pixbuf` stretched into the `width` x `height` box at `(x, y)`.
fn paint_image(
    cr: &Context,
    pixbuf: &Pixbuf,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(x, y);
    cr.scale(
        width / pixbuf.width() as f64,
        height / pixbuf.height() as f64,
    );
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint()?;
    cr.restore()
}

fn draw_numerals(cr: &Context, wheel: &WheelModel) -> Result<(), cairo::Error> {
    let center = wheel.size() / 2.0;
    let lift = -(center - center * NUMERAL_INSET + NUMERAL_HEIGHT / 2.0);

    for (i, numeral) in wheel.assets.numerals.iter().enumerate() {
        let Some(pixbuf) = numeral else { continue };
        let item_angle = i as f64 * SEGMENT_ANGLE + SEGMENT_ANGLE / 2.0;

        cr.save()?;
        cr.translate(center, center);
        cr.rotate(item_angle);
        cr.translate(0.0, lift);
        cr.translate(-center, -center);
        paint_image(
            cr,
            pixbuf,
            center - NUMERAL_WIDTH / 2.0,
            center,
            NUMERAL_WIDTH,
            NUMERAL_HEIGHT,
        )?;
        cr.restore()?;
    }
    Ok(())
}

fn fill_circle(
    cr: &Context,
    center: f64,
    radius: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.arc(center, center, radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_hub(cr: &Context, size: f64, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let center = size / 2.0;
    fill_circle(cr, center, size * SHADOW_RADIUS, colors.hub_shadow)?;
    fill_circle(cr, center, size * HUB_RADIUS, colors.hub)
}

fn draw_knob(cr: &Context, wheel: &WheelModel) -> Result<(), cairo::Error> {
    let Some(knob) = &wheel.assets.knob else {
        return Ok(());
    };
    let size = wheel.size();
    let side = size * KNOB_SIZE;
    paint_image(
        cr,
        knob,
        size / 2.0 - side / 2.0,
        size / 2.0 - size * KNOB_OFFSET,
        side,
        side,
    )
}

/// Draws the rotating chart and numerals, then the fixed hub and knob on top.
pub fn draw(cr: &Context, wheel: &WheelModel, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let center = wheel.size() / 2.0;

    cr.save()?;
    cr.translate(center, center);
    cr.rotate(wheel.selector.angle().get());
    cr.translate(-center, -center);
    draw_chart(cr, wheel)?;
    draw_numerals(cr, wheel)?;
    cr.restore()?;

    draw_hub(cr, wheel.size(), colors)?;
    draw_knob(cr, wheel)
}
