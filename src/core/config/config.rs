use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Largest side length that does not trigger a validation warning.
pub const LARGE_SIZE_WARN: u32 = 1024;

/// Run configuration for the icon generator.
///
/// Only operational knobs live here (which sizes, where to, which fonts to try).
/// Colors and the glyph are fixed by [`crate::rendering::IconStyle`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IconConfig {
    /// Side lengths to generate, processed in list order.
    pub sizes: Vec<u32>,
    /// Output directory. `None` means [`IconConfig::DEFAULT_OUT_DIR`].
    pub out_dir: Option<PathBuf>,
    /// Scalable font candidates, tried in order. The built-in bitmap face is used when none load.
    pub font_paths: Vec<PathBuf>,
    /// File name prefix; files are written as `{file_prefix}{size}.png`.
    pub file_prefix: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: vec![16, 32, 48, 128],
            out_dir: None,
            font_paths: default_font_paths(),
            file_prefix: "icon".into(),
        }
    }
}

fn default_font_paths() -> Vec<PathBuf> {
    [
        "arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl IconConfig {
    pub const DEFAULT_OUT_DIR: &'static str = "icons";

    /// Effective output directory.
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_OUT_DIR))
    }

    /// File name (not path) for one icon size.
    pub fn file_name(&self, size: u32) -> String {
        format!("{}{}.png", self.file_prefix, size)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load multiple config layers, later files overriding earlier ones (nested maps are merged).
    /// Missing files are skipped when `skip_missing` is set, otherwise reported.
    /// Returns (config, layer paths used, errors).
    pub fn load_layered<P, I>(paths: I, skip_missing: bool) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            let txt = match fs::read_to_string(path_ref) {
                Ok(txt) => txt,
                Err(e) if skip_missing && e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path_ref.display()));
                    continue;
                }
            };
            match ron::from_str::<Value>(&txt) {
                Ok(val) => {
                    match &mut merged {
                        Some(cur) => merge_value(cur, val),
                        None => merged = Some(val),
                    }
                    used.push(path_ref.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (Self::default(), used, errors);
        };
        match val.into_rust::<IconConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (Self::default(), used, errors)
            }
        }
    }

    /// Suspicious values as human-readable warnings. None of these stop a run;
    /// a zero size still fails when its icon is rendered.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.sizes.is_empty() {
            w.push("sizes is empty; nothing will be generated".into());
        }
        if self.sizes.contains(&0) {
            w.push("sizes contains 0; icon sizes must be positive".into());
        }
        let mut seen = Vec::with_capacity(self.sizes.len());
        for &s in &self.sizes {
            if seen.contains(&s) {
                w.push(format!("size {s} listed more than once; the file is overwritten"));
            } else {
                seen.push(s);
            }
            if s > LARGE_SIZE_WARN {
                w.push(format!("size {s} very large for a placeholder icon (> {LARGE_SIZE_WARN})"));
            }
        }
        if self.file_prefix.is_empty() {
            w.push("file_prefix empty; files are named by size only".into());
        } else if self.file_prefix.contains(['/', '\\']) {
            w.push(format!(
                "file_prefix {:?} contains a path separator; use out_dir instead",
                self.file_prefix
            ));
        }
        if self.font_paths.is_empty() {
            w.push("font_paths empty; the built-in bitmap face is always used".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_extension_sizes() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.sizes, vec![16, 32, 48, 128]);
        assert_eq!(cfg.out_dir(), PathBuf::from("icons"));
        assert_eq!(cfg.file_name(48), "icon48.png");
        assert!(cfg.validate().is_empty(), "defaults should validate cleanly: {:?}", cfg.validate());
    }

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            sizes: [16, 64],
            out_dir: Some("out/icons"),
            font_paths: ["fonts/Custom.ttf"],
            file_prefix: "logo-",
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = IconConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.sizes, vec![16, 64]);
        assert_eq!(cfg.out_dir(), PathBuf::from("out/icons"));
        assert_eq!(cfg.font_paths, vec![PathBuf::from("fonts/Custom.ttf")]);
        assert_eq!(cfg.file_name(64), "logo-64.png");
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let err = IconConfig::load_from_file("this/file/does/not/exist.ron").unwrap_err();
        assert!(err.starts_with("read config"), "{err}");
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r#"(sizes: [16, 32], file_prefix: "base")"#;
        let overlay = r#"(file_prefix: "icon", out_dir: Some("dist"))"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(overlay.as_bytes()).unwrap();
        let (cfg, used, errors) = IconConfig::load_layered([f1.path(), f2.path()], false);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.sizes, vec![16, 32]); // from base
        assert_eq!(cfg.file_prefix, "icon"); // overridden
        assert_eq!(cfg.out_dir(), PathBuf::from("dist"));
        assert_eq!(cfg.font_paths, IconConfig::default().font_paths);
    }

    #[test]
    fn layered_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("icons.local.ron");
        let (cfg, used, errors) = IconConfig::load_layered([&missing], true);
        assert!(used.is_empty());
        assert!(errors.is_empty());
        assert_eq!(cfg, IconConfig::default());

        let (_, _, errors) = IconConfig::load_layered([&missing], false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("read error"), "{errors:?}");
    }

    #[test]
    fn layered_parse_error_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"(sizes: [16,").unwrap();
        let (cfg, used, errors) = IconConfig::load_layered([f.path()], true);
        assert!(used.is_empty());
        assert!(errors[0].contains("parse error"));
        assert_eq!(cfg, IconConfig::default());
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = IconConfig {
            sizes: vec![0, 32, 32, 4096],
            out_dir: None,
            font_paths: vec![],
            file_prefix: "sub/icon".into(),
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("sizes contains 0"));
        assert!(joined.contains("size 32 listed more than once"));
        assert!(joined.contains("size 4096 very large"));
        assert!(joined.contains("path separator"));
        assert!(joined.contains("font_paths empty"));
        assert_eq!(warnings.len(), 5, "{joined}");

        let empty = IconConfig { sizes: vec![], file_prefix: String::new(), ..Default::default() };
        let joined = empty.validate().join(" | ");
        assert!(joined.contains("sizes is empty"));
        assert!(joined.contains("file_prefix empty"));
    }
}
