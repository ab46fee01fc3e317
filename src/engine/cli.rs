//! CLI entry: build options (defaults, then `.apodwall.toml`, then flags) and dispatch.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::engine::arg_parser::{Cli, Commands, FetchArgs, WallpaperArgs};
use crate::engine::handlers::{handle_fetch, handle_wallpapers};
use crate::utils::apodwall_toml::{
    apply_file_to_fetch_opts, apply_file_to_wallpaper_opts, load_apodwall_toml,
};
use crate::utils::config::PackagePaths;
use crate::utils::setup_logging;
use crate::wallpaper::check_ratio_bound;
use crate::{FetchOpts, WallpaperOpts};

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("read current directory")
}

/// Build [`FetchOpts`]: defaults → config file in the working directory → CLI.
pub fn setup_fetch_opts(args: &FetchArgs, verbose: Option<bool>) -> Result<FetchOpts> {
    let mut opts = FetchOpts::default();
    if let Some(file) = load_apodwall_toml(&current_dir()?) {
        apply_file_to_fetch_opts(&file, &mut opts);
    }
    if let Some(ref dir) = args.base_dir {
        opts.base_dir = dir.clone();
    }
    if let Some(format) = args.format {
        opts.format = format;
    }
    if let Some(parser) = args.parser {
        opts.parser = parser;
    }
    if let Some(ref url) = args.api_url {
        opts.api_url = url.clone();
    }
    if let Some(ref prefix) = args.host_prefix {
        opts.host_prefix = prefix.clone();
    }
    if let Some(v) = verbose {
        opts.verbose = v;
    }
    opts.dry_run = args.dry_run;
    Ok(opts)
}

/// Build [`WallpaperOpts`]: defaults → config file in the working directory → CLI.
pub fn setup_wallpaper_opts(
    args: &WallpaperArgs,
    verbose: Option<bool>,
) -> Result<WallpaperOpts> {
    wallpaper_opts_from(args, verbose, &current_dir()?)
}

fn wallpaper_opts_from(
    args: &WallpaperArgs,
    verbose: Option<bool>,
    config_dir: &Path,
) -> Result<WallpaperOpts> {
    let mut opts = WallpaperOpts {
        root: args.dir.clone(),
        ..WallpaperOpts::default()
    };
    if let Some(file) = load_apodwall_toml(config_dir) {
        apply_file_to_wallpaper_opts(&file, &mut opts);
    }
    if args.screen.is_some() {
        opts.screen = args.screen;
    }
    if let Some(v) = args.absolute_size {
        opts.policy.absolute_size = v;
    }
    if let Some(v) = args.screen_ratio {
        opts.policy.screen_ratio = v;
    }
    if let Some(v) = args.ratio_bound {
        opts.policy.ratio_bound = check_ratio_bound(v).context("--ratio-bound")?;
    }
    if !args.extensions.is_empty() {
        opts.extensions = args.extensions.clone();
    }
    if let Some(v) = args.follow_links {
        opts.follow_links = v;
    }
    if let Some(ref p) = args.list_file {
        opts.list_file = p.clone();
    }
    if let Some(ref p) = args.copy_dir {
        opts.copy_dir = Some(p.clone());
    }
    match args.copy {
        Some(true) if opts.copy_dir.is_none() => {
            opts.copy_dir = Some(PathBuf::from(PackagePaths::get().copy_dirname()));
        }
        Some(false) => opts.copy_dir = None,
        _ => {}
    }
    if let Some(v) = verbose {
        opts.verbose = v;
    }
    Ok(opts)
}

/// Run the selected subcommand.
pub fn handle_run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Fetch(args) => {
            let opts = setup_fetch_opts(args, cli.verbose)?;
            setup_logging(opts.verbose);
            debug!("{} CONFIG:{:#?}", PackagePaths::get().pkg_name().to_uppercase(), opts);
            handle_fetch(&opts)
        }
        Commands::Wallpapers(args) => {
            let opts = setup_wallpaper_opts(args, cli.verbose)?;
            setup_logging(opts.verbose);
            debug!("{} CONFIG:{:#?}", PackagePaths::get().pkg_name().to_uppercase(), opts);
            handle_wallpapers(&opts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size2D;
    use std::fs;

    fn args(dir: &Path) -> WallpaperArgs {
        WallpaperArgs {
            dir: dir.to_path_buf(),
            screen: None,
            absolute_size: None,
            screen_ratio: None,
            ratio_bound: None,
            extensions: Vec::new(),
            follow_links: None,
            list_file: None,
            copy: None,
            copy_dir: None,
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("apodwall-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn wallpaper_config_comes_from_config_dir_not_search_dir() {
        let cwd = scratch_dir("cfg-cwd");
        let photos = scratch_dir("cfg-photos");
        let name = PackagePaths::get().config_filename();
        fs::write(cwd.join(name), "[wallpapers]\nscreen = \"2560x1440\"\n").unwrap();
        fs::write(photos.join(name), "[wallpapers]\nscreen = \"800x600\"\n").unwrap();

        let opts = wallpaper_opts_from(&args(&photos), None, &cwd).unwrap();
        assert_eq!(opts.root, photos);
        assert_eq!(opts.screen, Some(Size2D::new(2560, 1440)));

        let _ = fs::remove_dir_all(&cwd);
        let _ = fs::remove_dir_all(&photos);
    }

    #[test]
    fn negative_ratio_bound_flag_is_rejected() {
        let cwd = scratch_dir("cfg-bound");
        let mut a = args(&cwd);
        a.ratio_bound = Some(-0.2);
        let err = wallpaper_opts_from(&a, None, &cwd).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid ratio bound"));

        a.ratio_bound = Some(f64::NAN);
        assert!(wallpaper_opts_from(&a, None, &cwd).is_err());

        a.ratio_bound = Some(0.1);
        let opts = wallpaper_opts_from(&a, None, &cwd).unwrap();
        assert_eq!(opts.policy.ratio_bound, 0.1);
        let _ = fs::remove_dir_all(&cwd);
    }
}
