use std::thread;
use std::time::{Duration, Instant};

use crate::config::{Config, SeedKind, FRAME_INTERVAL_MS};
use crate::error::Result;
use crate::simulation::{presets, FilePatternSource, Session};

/// Terminal driver: owns the session and feeds it wall-clock ticks
pub struct App {
    session: Session,
    config: Config,
    rate_counter: RateCounter,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        log::info!("Initializing Game of Life...");
        log::info!("Grid size: {}x{}", config.rows, config.cols);

        let mut session = Session::new(
            config.rows,
            config.cols,
            Duration::from_millis(config.speed_ms),
        )?;

        match config.seed {
            SeedKind::Empty => {}
            SeedKind::Glider => session.load(presets::glider(config.rows, config.cols)?)?,
            SeedKind::Random => session.randomize(config.density)?,
        }

        // A failed import keeps the seeded grid
        if let Some(path) = &config.pattern {
            let prompt = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let source = FilePatternSource::new(path);
            if let Err(e) = session.import_from(&source, &prompt) {
                log::warn!("Keeping {:?} seed: {}", config.seed, e);
            }
        }

        log::info!("Initial population: {}", session.population());

        Ok(Self {
            session,
            config,
            rate_counter: RateCounter::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the generation budget is spent. Frames are drawn only
    /// when a generation is committed.
    pub fn run(&mut self) {
        let frame = Duration::from_millis(FRAME_INTERVAL_MS);

        if !self.config.quiet {
            self.render();
        }
        self.session.start();

        let mut last_tick = Instant::now();
        while self.session.generation() < self.config.generations {
            thread::sleep(frame);

            let now = Instant::now();
            let elapsed = now.duration_since(last_tick);
            last_tick = now;

            if self.session.tick(elapsed).is_some() {
                if !self.config.quiet {
                    self.render();
                }
                if let Some(rate) = self.rate_counter.tick() {
                    log::info!(
                        "{:.1} gen/s (target {})",
                        rate,
                        self.session.generations_per_second()
                    );
                }
            }
        }

        self.session.stop();
        println!(
            "Finished: generation {}, population {}",
            self.session.generation(),
            self.session.population()
        );
    }

    fn render(&self) {
        println!(
            "Generation {} | Population {}",
            self.session.generation(),
            self.session.population()
        );
        print!("{}", self.session.grid());
    }
}

/// Measured generation rate
struct RateCounter {
    last_update: Instant,
    generation_count: u32,
}

impl RateCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            generation_count: 0,
        }
    }

    /// Count one committed generation, returns Some(rate) every second
    fn tick(&mut self) -> Option<f64> {
        self.generation_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let rate = self.generation_count as f64 / elapsed.as_secs_f64();
            self.generation_count = 0;
            self.last_update = Instant::now();
            Some(rate)
        } else {
            None
        }
    }
}
