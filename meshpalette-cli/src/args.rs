use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank the dominant colors of a 3D mesh asset", long_about = None)]
pub struct Args {
    /// Asset to analyze (glTF, GLB, OBJ or PLY).
    #[arg(default_value = "scene.gltf")]
    pub asset: PathBuf,

    /// Number of colors to print; 0 prints every color.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top_n: usize,

    /// Print every color (same as `--top-n 0`).
    #[arg(long, conflicts_with = "top_n")]
    pub all: bool,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Process sub-meshes on the calling thread only.
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for sub-mesh processing (default: one per core).
    #[arg(long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Log loader activity to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn effective_top_n(&self) -> usize {
        if self.all {
            0
        } else {
            self.top_n
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["meshpalette"]);
        assert_eq!(args.asset, PathBuf::from("scene.gltf"));
        assert_eq!(args.effective_top_n(), 10);
        assert!(!args.json);
    }

    #[test]
    fn test_all_overrides_top_n() {
        let args = Args::parse_from(["meshpalette", "model.obj", "--all"]);
        assert_eq!(args.asset, PathBuf::from("model.obj"));
        assert_eq!(args.effective_top_n(), 0);
    }

    #[test]
    fn test_sequential_conflicts_with_threads() {
        let result = Args::try_parse_from(["meshpalette", "--sequential", "--threads", "4"]);
        assert!(result.is_err());
    }
}
