//! Paint pass for the universe map. Reads state the engine already
//! computed this frame; nothing in here mutates or decides.

use web_sys::CanvasRenderingContext2d;

use crate::model::Universe;
use crate::state::{
    MapEngine, PlanetKind, PlanetVisual, Spacecraft, SystemLayout, Viewport, parallax_offset,
};

const BACKGROUND: &str = "#05070d";
const LABEL_COLOR: &str = "#c9d1d9";
const SHIP_RADIUS: f64 = 15.0;

pub fn paint_frame(
    ctx: &CanvasRenderingContext2d,
    engine: &MapEngine,
    universe: &Universe,
    layout: &[SystemLayout],
    viewport: Viewport,
) {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    paint_stars(ctx, engine, viewport);

    if universe.systems.is_empty() {
        paint_empty_notice(ctx, viewport);
        return;
    }

    for (system, row) in universe.systems.iter().zip(layout) {
        paint_system_star(ctx, row, &system.name);
        for (planet, spot) in system.planets.iter().zip(&row.planets) {
            let visual = engine.visuals.get(planet.id).copied();
            paint_planet(ctx, spot.center.x, spot.center.y, spot.radius, visual);
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.set_text_align("center");
            ctx.set_font("13px sans-serif");
            let _ = ctx.fill_text(&planet.name, spot.center.x, spot.center.y + spot.radius + 16.0);
        }
    }

    paint_ship(ctx, &engine.ship);
}

fn paint_stars(ctx: &CanvasRenderingContext2d, engine: &MapEngine, viewport: Viewport) {
    for star in engine.stars.stars() {
        let (dx, dy) = parallax_offset(star, &engine.ship, viewport.width, viewport.height);
        let (r, g, b) = star.color;
        ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {:.2})", r, g, b, star.opacity));
        ctx.begin_path();
        ctx.arc(star.x + dx, star.y + dy, star.size, 0.0, std::f64::consts::PI * 2.0)
            .ok();
        ctx.fill();
    }
}

fn paint_empty_notice(ctx: &CanvasRenderingContext2d, viewport: Viewport) {
    ctx.set_fill_style_str("#fff");
    ctx.set_font("20px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(
        "🚀 Universe is empty — add a system to begin",
        viewport.width / 2.0,
        viewport.height / 2.0,
    );
}

fn paint_system_star(ctx: &CanvasRenderingContext2d, row: &SystemLayout, name: &str) {
    let (x, y, r) = (row.star.x, row.star.y, row.star_radius);
    if let Ok(gradient) = ctx.create_radial_gradient(x, y, r * 0.1, x, y, r) {
        gradient.add_color_stop(0.0, "#fff8e1").ok();
        gradient.add_color_stop(0.55, "#ffd27d").ok();
        gradient.add_color_stop(1.0, "#b36b00").ok();
        ctx.set_fill_style_canvas_gradient(&gradient);
    } else {
        ctx.set_fill_style_str("#ffd27d");
    }
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, std::f64::consts::PI * 2.0).ok();
    ctx.fill();

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_text_align("center");
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(name, x, y + r + 18.0);
}

fn hsl(hue: f64, saturation: u32, lightness: u32) -> String {
    format!("hsl({:.0}, {}%, {}%)", hue, saturation, lightness)
}

fn paint_planet(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    visual: Option<PlanetVisual>,
) {
    let Some(visual) = visual else {
        // Attributes not assigned yet (first frame race): flat placeholder.
        ctx.set_fill_style_str("#555");
        ctx.begin_path();
        ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0).ok();
        ctx.fill();
        return;
    };

    let hue = visual.hue;
    // Highlight sits up-left of center to fake a light source.
    let gradient = ctx.create_radial_gradient(
        x - radius * 0.35,
        y - radius * 0.35,
        radius * 0.15,
        x,
        y,
        radius,
    );
    match gradient {
        Ok(gradient) => {
            match visual.kind {
                PlanetKind::Rocky => {
                    gradient.add_color_stop(0.0, &hsl(hue, 60, 62)).ok();
                    gradient.add_color_stop(0.6, &hsl(hue, 55, 38)).ok();
                    gradient.add_color_stop(1.0, "#05060a").ok();
                }
                PlanetKind::Gas => {
                    gradient.add_color_stop(0.0, &hsl(hue, 70, 72)).ok();
                    gradient.add_color_stop(0.5, &hsl(hue, 65, 48)).ok();
                    gradient.add_color_stop(1.0, &hsl(hue, 60, 24)).ok();
                }
                PlanetKind::Ice => {
                    gradient.add_color_stop(0.0, "#ffffff").ok();
                    gradient.add_color_stop(0.5, &hsl(hue, 45, 85)).ok();
                    gradient.add_color_stop(1.0, "#8d99a6").ok();
                }
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        Err(_) => ctx.set_fill_style_str(&hsl(hue, 60, 50)),
    }
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0).ok();
    ctx.fill();

    if visual.kind == PlanetKind::Gas && visual.ring {
        ctx.set_stroke_style_str(&format!("hsla({:.0}, 60%, 70%, 0.7)", hue));
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.ellipse(
            x,
            y,
            radius * 1.7,
            radius * 0.55,
            -0.4,
            0.0,
            std::f64::consts::PI * 2.0,
        )
        .ok();
        ctx.stroke();
    }
}

fn paint_ship(ctx: &CanvasRenderingContext2d, ship: &Spacecraft) {
    ctx.set_fill_style_str("white");
    ctx.begin_path();
    ctx.arc(ship.x, ship.y, SHIP_RADIUS, 0.0, std::f64::consts::PI * 2.0)
        .ok();
    ctx.fill();
    ctx.set_text_align("center");
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("🚀", ship.x, ship.y - 20.0);
}
