//! Decoding of the path mini-language (the `d` attribute of `<path>`) into [`Path`]s.

use anyhow::{Result, anyhow, bail};
use shapepack::RepackError;
use shapepack::geometry::primitives::{Path, PathElement, Point};
use std::slice::ChunksExact;
use svg::node::element::path::{Command, Data, Number, Position};

/// Decodes path data into absolute [`PathElement`]s.
///
/// Cubic curves become curves with two control points, quadratic curves with one. The implicit
/// control point of the smooth variants is reflected from the previous curve of the same
/// degree. Elliptical arcs are not supported.
pub fn decode(d: &str) -> Result<Path> {
    let data = Data::parse(d).map_err(|e| anyhow!("malformed path data: {e}"))?;
    let mut decoder = Decoder::default();
    for command in data.iter() {
        decoder.decode(command)?;
    }
    Ok(Path::new(decoder.elements))
}

#[derive(Default)]
struct Decoder {
    elements: Vec<PathElement>,
    current: Point,
    subpath_start: Point,
    /// Second control point of the previous cubic curve
    cubic_ctrl: Option<Point>,
    /// Control point of the previous quadratic curve
    quad_ctrl: Option<Point>,
}

impl Decoder {
    fn decode(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Move(pos, params) => {
                for (i, c) in chunks(params, 2, "moveto")?.enumerate() {
                    let p = self.resolve(pos, c[0], c[1]);
                    match i {
                        0 => {
                            self.elements.push(PathElement::Move(p));
                            self.current = p;
                            self.subpath_start = p;
                            self.cubic_ctrl = None;
                            self.quad_ctrl = None;
                        }
                        //subsequent pairs are implicit lineto commands
                        _ => self.line_to(p),
                    }
                }
            }
            Command::Line(pos, params) => {
                for c in chunks(params, 2, "lineto")? {
                    let p = self.resolve(pos, c[0], c[1]);
                    self.line_to(p);
                }
            }
            Command::HorizontalLine(pos, params) => {
                for c in chunks(params, 1, "horizontal lineto")? {
                    let x = f64::from(c[0]);
                    let p = match pos {
                        Position::Absolute => Point(x, self.current.1),
                        Position::Relative => Point(self.current.0 + x, self.current.1),
                    };
                    self.line_to(p);
                }
            }
            Command::VerticalLine(pos, params) => {
                for c in chunks(params, 1, "vertical lineto")? {
                    let y = f64::from(c[0]);
                    let p = match pos {
                        Position::Absolute => Point(self.current.0, y),
                        Position::Relative => Point(self.current.0, self.current.1 + y),
                    };
                    self.line_to(p);
                }
            }
            Command::CubicCurve(pos, params) => {
                for c in chunks(params, 6, "curveto")? {
                    let c1 = self.resolve(pos, c[0], c[1]);
                    let c2 = self.resolve(pos, c[2], c[3]);
                    let end = self.resolve(pos, c[4], c[5]);
                    self.curve_to(vec![c1, c2], end);
                    self.cubic_ctrl = Some(c2);
                }
            }
            Command::SmoothCubicCurve(pos, params) => {
                for c in chunks(params, 4, "smooth curveto")? {
                    let c1 = self.reflect(self.cubic_ctrl);
                    let c2 = self.resolve(pos, c[0], c[1]);
                    let end = self.resolve(pos, c[2], c[3]);
                    self.curve_to(vec![c1, c2], end);
                    self.cubic_ctrl = Some(c2);
                }
            }
            Command::QuadraticCurve(pos, params) => {
                for c in chunks(params, 4, "quadratic curveto")? {
                    let c1 = self.resolve(pos, c[0], c[1]);
                    let end = self.resolve(pos, c[2], c[3]);
                    self.curve_to(vec![c1], end);
                    self.quad_ctrl = Some(c1);
                }
            }
            Command::SmoothQuadraticCurve(pos, params) => {
                for c in chunks(params, 2, "smooth quadratic curveto")? {
                    let c1 = self.reflect(self.quad_ctrl);
                    let end = self.resolve(pos, c[0], c[1]);
                    self.curve_to(vec![c1], end);
                    self.quad_ctrl = Some(c1);
                }
            }
            Command::EllipticalArc(..) => {
                return Err(RepackError::UnsupportedElementKind {
                    kind: "elliptical arc".to_owned(),
                }
                .into());
            }
            Command::Close => {
                self.elements.push(PathElement::Close {
                    start: self.current,
                    end: self.subpath_start,
                });
                self.current = self.subpath_start;
                self.cubic_ctrl = None;
                self.quad_ctrl = None;
            }
        }
        Ok(())
    }

    /// Absolute position of a coordinate pair, relative ones are taken from the current point
    fn resolve(&self, pos: &Position, x: Number, y: Number) -> Point {
        let p = Point(f64::from(x), f64::from(y));
        match pos {
            Position::Absolute => p,
            Position::Relative => self.current + p,
        }
    }

    /// Reflection of `ctrl` about the current point, or the current point itself if there is no previous control point
    fn reflect(&self, ctrl: Option<Point>) -> Point {
        match ctrl {
            Some(c) => self.current + (self.current - c),
            None => self.current,
        }
    }

    fn line_to(&mut self, end: Point) {
        self.elements.push(PathElement::Line {
            start: self.current,
            end,
        });
        self.current = end;
        self.cubic_ctrl = None;
        self.quad_ctrl = None;
    }

    fn curve_to(&mut self, control_points: Vec<Point>, end: Point) {
        self.elements.push(PathElement::Curve {
            start: self.current,
            end,
            control_points,
        });
        self.current = end;
        self.cubic_ctrl = None;
        self.quad_ctrl = None;
    }
}

fn chunks<'a>(params: &'a [Number], arity: usize, command: &str) -> Result<ChunksExact<'a, Number>> {
    if params.is_empty() || params.len() % arity != 0 {
        bail!(
            "{command} expects a multiple of {arity} parameters, got {}",
            params.len()
        );
    }
    Ok(params.chunks_exact(arity))
}
