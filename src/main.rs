use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fastrand::Rng;
use poiswarm::algorithms::particles::TrackingSwarmObserver;
use poiswarm::core::CtrlCAbortSignal;
use poiswarm::prelude::*;

const N_PARTICLES: usize = 25;
const FRAME_MS: Float = 16.0;
const N_FRAMES: usize = 60 * 30;
const RETARGET_EVERY: usize = 60 * 8;

fn main() -> Result<(), Box<dyn Error>> {
    // Create and seed a random number generator
    let mut rng = Rng::with_seed(0);

    let low = Vector2d::from([10.0, 10.0]);
    let high = Vector2d::from([790.0, 590.0]);
    let mut swarm = Swarm::new(Vector2d::from([800.0, 600.0]), Vector2d::from([1.0, 1.0]))
        .with_rng(rng.fork())
        .with_point_of_interest(Vector2d::random(&low, &high, &mut rng)?);
    for _ in 0..N_PARTICLES {
        swarm.add_particle()?;
    }

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::<Vector2d>::build();
    let abort = CtrlCAbortSignal::new();

    let mut driver = Driver::new(swarm).setup(|d| d.add_observer(tracker.clone()));

    // Stand in for a render loop: one tick per frame, with the target occasionally moved the way
    // a mouse click would move it.
    for frame in 1..=N_FRAMES {
        if abort.is_aborted() {
            break;
        }
        driver.tick(FRAME_MS)?;
        if frame % RETARGET_EVERY == 0 {
            driver.set_point_of_interest(Vector2d::random(&low, &high, &mut rng)?);
        }
    }

    println!("{}", driver.swarm);
    println!(
        "rounds: {}, fitness evaluations: {}, best fitness: {:.5}",
        driver.swarm.status().n_rounds,
        driver.swarm.status().n_f_evals,
        driver.swarm.best_fitness()
    );

    // Export the results to a Python .pkl file to visualize via matplotlib
    let mut writer = BufWriter::new(File::create(Path::new("swarm.pkl"))?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    Ok(())
}
