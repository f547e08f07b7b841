// What you SEE:
// • The source image sits on a black sky, with the lens marked by a dot
//   and the Einstein ring drawn around it.
// • Its two lensed images are drawn on top, one outside the ring and one
//   inside it on the far side.
// • Hold Left Mouse to drag the source; the images follow live. ESC quits.

use point_lens::app::Simulation;
use point_lens::config::Settings;
use point_lens::draw::Drawer;
use point_lens::error::Error;
use point_lens::scene::load_source;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let cfg = settings.config();

    /* --- Source image ---
       Fails before any window opens if the file is missing or not an image. */
    let source = load_source(&settings.image_path, settings.source_size, settings.max_samples, &cfg)?;

    /* --- Window + loop ---
       Visual: window opens and shows the lensed scene until closed. */
    let mut drawer = Drawer::new(&settings.title, cfg.width, cfg.height, settings.target_fps)?;
    let mut sim = Simulation::new(cfg, source);
    sim.run(&mut drawer)?;

    Ok(())
}
