use std::{error::Error,
          f64::consts::PI,
          fs::File,
          io::BufWriter};
use parametric_curves::{shapes::trefoil, Sampling};

fn main() -> Result<(), Box<dyn Error>> {
    // Two copies of the knot, the second one scaled and lifted.
    let s = Sampling::param(trefoil, 0., 2. * PI).n(300).build();
    s.write_json(&mut BufWriter::new(File::create("/tmp/trefoil.json")?))?;

    let s = Sampling::param(|t| {
        let [x, y, z] = trefoil(t);
        [0.5 * x, 0.5 * y, 0.5 * z + 3.]
    }, 0., 2. * PI).n(300).build();
    s.write_json(&mut BufWriter::new(File::create("/tmp/trefoil_small.json")?))?;
    Ok(())
}
