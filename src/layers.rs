//! A scene of three solids, each drawn by its own stacked layer, whose
//! visibility is toggled from the keyboard: `s` for the sphere, `c`
//! for the cone and `u` for the cube.  Below them, the base layer 0
//! holds no solid and always paints the opaque background.

use std::{fmt::{self, Display, Formatter},
          io::{self, BufRead, Write}};
use log::{debug, info};
use rgb::RGBA;

/// Background of a layer that is drawn.
pub const VISIBLE_BACKGROUND: RGBA<f32> =
    RGBA { r: 0.1, g: 0.2, b: 0.4, a: 1.0 };
/// Background of a hidden layer: fully transparent.
pub const HIDDEN_BACKGROUND: RGBA<f32> =
    RGBA { r: 0., g: 0., b: 0., a: 0. };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Sphere,
    Cone,
    Cube,
}

/// Solid drawn by a layer, with the sizes and tessellation handed to
/// the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere { radius: f64, theta_resolution: u32, phi_resolution: u32 },
    Cone { height: f64, radius: f64, resolution: u32 },
    Cube { x_length: f64, y_length: f64, z_length: f64 },
}

impl Layer {
    /// Layers from bottom to top.
    pub const ALL: [Layer; 3] = [Layer::Cube, Layer::Cone, Layer::Sphere];

    /// The layer toggled by `key`, if any.
    pub fn from_key(key: &str) -> Option<Layer> {
        match key {
            "s" => Some(Layer::Sphere),
            "c" => Some(Layer::Cone),
            "u" => Some(Layer::Cube),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Layer::Sphere => 's',
            Layer::Cone => 'c',
            Layer::Cube => 'u',
        }
    }

    /// Stacking order in the render window; higher is drawn on top.
    pub fn depth(self) -> u32 {
        match self {
            Layer::Sphere => 3,
            Layer::Cone => 2,
            Layer::Cube => 1,
        }
    }

    pub fn primitive(self) -> Primitive {
        match self {
            Layer::Sphere => Primitive::Sphere { radius: 5.,
                                                 theta_resolution: 32,
                                                 phi_resolution: 32 },
            Layer::Cone => Primitive::Cone { height: 10.,  radius: 5.,
                                             resolution: 32 },
            Layer::Cube => Primitive::Cube { x_length: 6.,  y_length: 6.,
                                             z_length: 6. },
        }
    }

    fn index(self) -> usize {
        match self {
            Layer::Sphere => 0,
            Layer::Cone => 1,
            Layer::Cube => 2,
        }
    }
}

impl Display for Layer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layer::Sphere => "sphere",
            Layer::Cone => "cone",
            Layer::Cube => "cube",
        })
    }
}

/// How the renderer must paint a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub draw: bool,
    pub background: RGBA<f32>,
}

/// Visibility of the three layers.  All layers start visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    visible: [bool; 3],
}

impl Default for LayerVisibility {
    fn default() -> Self { LayerVisibility { visible: [true; 3] } }
}

impl LayerVisibility {
    pub fn is_visible(&self, layer: Layer) -> bool {
        self.visible[layer.index()]
    }

    /// Flip the visibility of `layer` and return the new value.
    pub fn toggle(&mut self, layer: Layer) -> bool {
        let v = &mut self.visible[layer.index()];
        *v = !*v;
        *v
    }

    /// Key press handler.  Return the toggled layer, or `None` if
    /// `key` is not bound.
    pub fn handle_key(&mut self, key: &str) -> Option<Layer> {
        let layer = Layer::from_key(key)?;
        self.toggle(layer);
        Some(layer)
    }

    pub fn paint(&self, layer: Layer) -> Paint {
        if self.is_visible(layer) {
            Paint { draw: true,  background: VISIBLE_BACKGROUND }
        } else {
            Paint { draw: false,  background: HIDDEN_BACKGROUND }
        }
    }
}

fn write_layer(out: &mut impl Write, depth: u32, name: &str, paint: Paint,
               content: &str) -> io::Result<()> {
    let bg = paint.background;
    writeln!(out, "layer {} {:<6} {:<7} background rgba({}, {}, {}, {})  {}",
             depth, name, if paint.draw { "shown" } else { "hidden" },
             bg.r, bg.g, bg.b, bg.a, content)
}

/// Depth of the base layer, under every [`Layer`].
pub const BASE_DEPTH: u32 = 0;

/// The render window and its layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    /// Number of layers of the window, the base layer included.
    pub layer_count: u32,
    pub visibility: LayerVisibility,
}

impl Default for Scene {
    fn default() -> Self {
        Scene { title: "Sphere, Cone, and Cube",
                width: 800,  height: 600,
                layer_count: Layer::ALL.len() as u32 + 1,
                visibility: LayerVisibility::default() }
    }
}

impl Scene {
    /// The layers, bottom to top, with what to draw and how to paint
    /// them.
    pub fn layers(&self) -> impl Iterator<Item = (Layer, Primitive, Paint)> + '_ {
        Layer::ALL.into_iter()
            .map(move |l| (l, l.primitive(), self.visibility.paint(l)))
    }

    /// Paint of the base layer.  It cannot be toggled.
    pub fn base(&self) -> Paint {
        Paint { draw: true,  background: VISIBLE_BACKGROUND }
    }

    /// Write one line per layer, base layer first.
    pub fn write_table(&self, out: &mut impl Write) -> io::Result<()> {
        write_layer(out, BASE_DEPTH, "base", self.base(), "Background")?;
        for (layer, primitive, paint) in self.layers() {
            write_layer(out, layer.depth(), &layer.to_string(), paint,
                        &format!("{:?}", primitive))?;
        }
        Ok(())
    }

    /// Key loop of the render window: every word of `input` is a key
    /// press.  The table of layers is written to `out` at the start and
    /// after each toggle.  `q` or the end of `input` stops the loop.
    pub fn run_keys<R: BufRead, W: Write>(&mut self, input: R, mut out: W)
                                          -> io::Result<()> {
        self.write_table(&mut out)?;
        for line in input.lines() {
            for key in line?.split_whitespace() {
                if key == "q" { return out.flush() }
                match self.visibility.handle_key(key) {
                    Some(layer) => {
                        info!("{} layer {}", layer,
                              if self.visibility.is_visible(layer) { "shown" }
                              else { "hidden" });
                        self.write_table(&mut out)?;
                    }
                    None => debug!("Ignoring key {:?}", key),
                }
            }
        }
        out.flush()
    }
}
