use std::{error::Error,
          fs::File,
          io::{BufWriter, Write}};
use parametric_curves::{shapes::{Hyperboloid, Lissajous, Shape, SineWave,
                                 Spiral, Trefoil},
                        Sampling};

type R = Result<(), Box<dyn Error>>;

fn main() -> R {
    let mut fh = File::create("/tmp/gallery.gp")?;
    write!(fh, "set terminal pngcairo\n\
                set grid\n")?;
    let mut save = |s: &Sampling, name: &str| -> R {
        let fname = format!("/tmp/{}.dat", name);
        s.write(&mut BufWriter::new(File::create(&fname)?))?;
        write!(fh, "set output \"{}.png\"\n\
                    splot '{}' with l lt 1 lw 1 title \"{} ({} pts)\"\n",
               name, &fname, name, s.len())?;
        Ok(())
    };

    save(&SineWave::default().sample(), SineWave::NAME)?;
    save(&Lissajous::default().sample(), Lissajous::NAME)?;
    save(&Trefoil::default().sample(), Trefoil::NAME)?;
    save(&Spiral { turns: 8, ..Default::default() }.sample(), Spiral::NAME)?;
    let h = Hyperboloid { u_min: -1., u_max: 1., u_steps: 20, v_steps: 36,
                          ..Default::default() };
    save(&h.sample(), Hyperboloid::NAME)?;
    Ok(())
}
