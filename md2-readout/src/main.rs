mod config;
mod report;

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use common::prelude::*;
use md2::{Md2Error, Model};
use rayon::prelude::*;

use config::ReadoutConfig;
use report::ModelReport;

const DEFAULT_CONFIG: &str = "conf.ini";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let config = match ReadoutConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}: {err}", config_path.display());
            return ExitCode::FAILURE;
        }
    };

    let vfs = match load_inputs(&config) {
        Ok(vfs) => vfs,
        Err(err) => {
            log::error!("failed to read models: {err}");
            return ExitCode::FAILURE;
        }
    };
    if vfs.is_empty() {
        log::warn!("no models found");
        return ExitCode::SUCCESS;
    }

    let now = Instant::now();
    let results = decode_all(&vfs, config.flip_uvs);
    log::info!(
        "decoded {} models in {:.2?}",
        results.len(),
        now.elapsed()
    );

    let mut failed = 0;
    for result in &results {
        match result {
            Ok(report) => report.log(),
            Err((path, err)) => {
                failed += 1;
                log::error!("{path}: {err}");
            }
        }
    }

    if failed > 0 {
        log::error!("{failed} of {} models failed to decode", results.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_inputs(config: &ReadoutConfig) -> std::io::Result<VFileSystem> {
    let mut vfs = VFileSystem::default();
    if let Some(dir) = &config.dir {
        let count = vfs.load_dir(dir, "md2")?;
        log::info!("found {count} models in {}", dir.display());
    }
    for file in &config.files {
        vfs.load_file(Path::new(file))?;
    }
    Ok(vfs)
}

/// Decode every file on the rayon pool, keeping path order.
fn decode_all(vfs: &VFileSystem, flip_uvs: bool) -> Vec<Result<ModelReport, (String, Md2Error)>> {
    vfs.files_sorted()
        .par_iter()
        .map(|&(path, bytes)| {
            Model::decode(bytes)
                .map(|model| ModelReport::new(path, &model, bytes.len(), flip_uvs))
                .map_err(|err| (path.to_owned(), err))
        })
        .collect()
}

#[cfg(test)]
mod readout_tests {
    use super::*;

    fn minimal_model() -> Vec<u8> {
        let words: [i32; 17] = [
            i32::from_le_bytes(*b"IDP2"),
            8,
            16,
            16,
            44,
            0,
            1,
            1,
            1,
            0,
            1,
            68,
            68,
            72,
            84,
            128,
            128,
        ];
        let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        bytes.extend([8, 0, 8, 0]);
        bytes.extend([0u8; 12]);
        for f in [1.0f32, 1.0, 1.0, 0.0, 0.0, 0.0] {
            bytes.extend(f.to_le_bytes());
        }
        bytes.extend(*b"frame1\0\0\0\0\0\0\0\0\0\0");
        bytes.extend([1, 2, 3, 0]);
        bytes
    }

    #[test]
    fn decodes_in_path_order_and_keeps_failures() {
        let mut vfs = VFileSystem::default();
        vfs.insert("b.md2", minimal_model());
        vfs.insert("a.md2", b"\xff\xd8\xff\xe0 not a model".to_vec());
        vfs.insert("c.md2", minimal_model()[..100].to_vec());

        let results = decode_all(&vfs, false);
        assert_eq!(results.len(), 3);

        let (path, err) = results[0].as_ref().unwrap_err();
        assert_eq!(path, "a.md2");
        assert!(matches!(err, Md2Error::BadMagicOrVersion { .. }));

        let report = results[1].as_ref().unwrap();
        assert_eq!(report.path, "b.md2");
        assert_eq!(report.num_frames, 1);
        assert_eq!(report.uv_bounds.map(|(min, _)| min), Some(glam::vec2(0.5, 0.5)));

        let (path, err) = results[2].as_ref().unwrap_err();
        assert_eq!(path, "c.md2");
        assert!(matches!(err, Md2Error::TruncatedData { .. }));
    }
}
