use super::{Scene, SceneParameters};

use std::io::{self, Write};

fn write_parameters<W: Write>(parameters: &SceneParameters, out: &mut W) -> io::Result<()> {
    let SceneParameters {
        resolution,
        scaling_factor,
        antialias_samples,
        eye: [ex, ey, ez],
        focus: [fx, fy, fz],
        focal_length,
        rotation,
        photons,
        ambient_light: [ar, ag, ab],
        background_color: [br, bg, bb],
    } = parameters;
    writeln!(out, "#parameters")?;
    writeln!(out, "{} {}", resolution.width, resolution.height)?;
    writeln!(out, "{}", scaling_factor)?;
    writeln!(out, "{}", antialias_samples)?;
    writeln!(out, "{} {} {}", ex, ey, ez)?;
    writeln!(out, "{} {} {}", fx, fy, fz)?;
    writeln!(out, "{}", focal_length)?;
    writeln!(out, "{}", rotation)?;
    writeln!(out, "{}", photons)?;
    writeln!(out, "{} {} {}", ar, ag, ab)?;
    writeln!(out, "{} {} {}", br, bg, bb)?;
    Ok(())
}

/// Writes the scene in the renderer's line oriented text format.
///
/// Every section after `#parameters` starts with a count line, which is taken
/// from the length of the corresponding record list.
pub fn write_scene<W: Write>(scene: &Scene, mut out: W) -> io::Result<()> {
    write_parameters(&scene.parameters, &mut out)?;

    writeln!(out, "#lights")?;
    writeln!(out, "{}", scene.lights.len())?;
    for light in &scene.lights {
        writeln!(out, "{}", light)?;
    }

    writeln!(out, "#materials")?;
    writeln!(out, "{}", scene.materials.len())?;
    for material in &scene.materials {
        writeln!(out, "{}", material)?;
    }

    writeln!(out, "#shapes")?;
    writeln!(out, "{}", scene.shapes.len())?;
    for shape in &scene.shapes {
        writeln!(out, "{}", shape)?;
    }
    out.flush()
}
