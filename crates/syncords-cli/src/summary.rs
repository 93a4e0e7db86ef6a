use std::path::Path;

use console::Style;
use syncords_core::io::LoadedImage;
use syncords_core::points::format_coordinate;
use syncords_core::session::Session;
use syncords_core::transform::{GeoTransform, WorldPoint};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn world(p: WorldPoint) -> String {
    format!("{}, {}", format_coordinate(p.x), format_coordinate(p.y))
}

pub fn print_image_summary(image: &LoadedImage) {
    let s = Styles::new();
    let (w, h) = (image.width(), image.height());

    println!();
    println!("  {}", s.title.apply_to("SynCords Image"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(image.path.display())
    );
    println!("  {:<14}{}", s.label.apply_to("Format"), s.method.apply_to(image.kind));
    println!("  {:<14}{}", s.label.apply_to("Dimensions"), s.value.apply_to(format!("{w}x{h}")));
    match image.raster.value_range() {
        Some((lo, hi)) => println!(
            "  {:<14}{}",
            s.label.apply_to("Samples"),
            s.value.apply_to(format!("{lo} .. {hi}"))
        ),
        None => println!("  {:<14}{}", s.label.apply_to("Samples"), s.disabled.apply_to("no finite values")),
    }
    println!();

    println!("  {}", s.header.apply_to("Transform"));
    println!("    {:<12}{}", s.label.apply_to("Variant"), s.method.apply_to(image.transform.kind()));
    match image.transform {
        GeoTransform::Affine(t) => {
            for (name, v) in [("a", t.a), ("b", t.b), ("c", t.c), ("d", t.d), ("e", t.e), ("f", t.f)] {
                println!("    {:<12}{}", s.label.apply_to(name), s.value.apply_to(v));
            }
        }
        GeoTransform::FixedScale(t) => {
            println!("    {:<12}{}", s.label.apply_to("Scale"), s.value.apply_to(t.scale));
            println!(
                "    {:<12}{}",
                s.label.apply_to("Center"),
                s.value.apply_to(format!("{}, {}", t.center_x, t.center_y))
            );
            let flip = if t.flip_y { s.method.apply_to("yes") } else { s.disabled.apply_to("no") };
            println!("    {:<12}{}", s.label.apply_to("Flip Y"), flip);
        }
    }
    println!();

    // Last valid pixel on each axis; the raster is never empty.
    let (x1, y1) = (w as i64 - 1, h as i64 - 1);
    println!("  {}", s.header.apply_to("Corners"));
    for (name, px, py) in [
        ("Top left", 0, 0),
        ("Top right", x1, 0),
        ("Bottom left", 0, y1),
        ("Bottom right", x1, y1),
    ] {
        println!(
            "    {:<14}{}",
            s.label.apply_to(name),
            s.value.apply_to(world(image.transform.pixel_to_world(px, py)))
        );
    }
    println!();
}

pub fn print_record_summary(session: &Session, skipped: usize, path: &Path) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Recorded"),
        s.value.apply_to(session.points().len())
    );
    if skipped > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skipped"),
            s.disabled.apply_to(format!("{skipped} outside raster"))
        );
    }
    println!("  {:<14}{}", s.label.apply_to("Saved"), s.path.apply_to(path.display()));
    println!();
}
