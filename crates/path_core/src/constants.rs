/// Edge weight type
pub type Weight = f64;
/// Planar coordinate pair `[x, y]`
pub type Coord = [f64; 2];
/// Distance of a node that has not been reached (yet)
pub const INFINITY: Weight = Weight::INFINITY;
