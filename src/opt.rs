use clap::Parser;
use std::path::PathBuf;

/// Fix up compiler-generated dependency files.
///
/// Rewrites a GCC-generated dependency file so it is suitable for
/// inclusion in a GNU Makefile: every prerequisite additionally gets an
/// empty rule of its own, so deleting or renaming a header no longer
/// breaks the build.
#[derive(Clone, Debug, Parser)]
#[clap(version)]
pub struct Opt {
    /// Output filename (defaults to the input name with a ".deps" extension)
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Remove the input file after writing the output
    #[clap(short, long)]
    pub clean: bool,

    /// Dependency file to process
    #[clap(value_name = "DEP_FILE")]
    pub file: PathBuf,
}

impl Opt {
    /// Path the expanded file is written to.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => self.file.with_extension("deps"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_replaces_extension() {
        let opt = Opt {
            output: None,
            clean: false,
            file: PathBuf::from("foo.d"),
        };
        assert_eq!(opt.output_path(), PathBuf::from("foo.deps"));

        let opt = Opt {
            output: None,
            clean: false,
            file: PathBuf::from("dir/bar"),
        };
        assert_eq!(opt.output_path(), PathBuf::from("dir/bar.deps"));
    }

    #[test]
    fn explicit_output_wins() {
        let opt = Opt {
            output: Some(PathBuf::from("out.mk")),
            clean: false,
            file: PathBuf::from("foo.d"),
        };
        assert_eq!(opt.output_path(), PathBuf::from("out.mk"));
    }
}
