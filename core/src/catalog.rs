use crate::model::JobPosting;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaFile {
    pub num_postings: u32,
    pub num_open: u32,
    pub created_at: String,
    pub version: u32,
}

pub struct CatalogPaths {
    pub root: PathBuf,
}

impl CatalogPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn postings(&self) -> PathBuf { self.root.join("postings.bin") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

pub fn save_postings(paths: &CatalogPaths, postings: &[JobPosting]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.postings())?;
    let bytes = bincode::serialize(postings)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_postings(paths: &CatalogPaths) -> Result<Vec<JobPosting>> {
    let file = paths.postings();
    let mut f = File::open(&file).with_context(|| format!("opening {}", file.display()))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let postings = bincode::deserialize(&buf).context("decoding postings")?;
    Ok(postings)
}

pub fn save_meta(paths: &CatalogPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &CatalogPaths) -> Result<MetaFile> {
    let file = paths.meta();
    let mut f = File::open(&file).with_context(|| format!("opening {}", file.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}

/// Write postings and a matching meta file. Returns the meta that was written.
pub fn save_catalog(paths: &CatalogPaths, postings: &[JobPosting], created_at: String) -> Result<MetaFile> {
    let meta = MetaFile {
        num_postings: postings.len() as u32,
        num_open: postings.iter().filter(|p| p.is_open()).count() as u32,
        created_at,
        version: CATALOG_VERSION,
    };
    save_postings(paths, postings)?;
    save_meta(paths, &meta)?;
    Ok(meta)
}

/// Postings held in memory by a boundary between reloads.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub postings: Vec<JobPosting>,
    pub meta: MetaFile,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|p| p.id == id)
    }

    /// Open postings in stored order.
    pub fn open_postings(&self) -> Vec<JobPosting> {
        self.postings.iter().filter(|p| p.is_open()).cloned().collect()
    }

    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}

pub fn load_catalog(paths: &CatalogPaths) -> Result<Catalog> {
    let meta = load_meta(paths)?;
    if meta.version != CATALOG_VERSION {
        anyhow::bail!("unsupported catalog version {} (expected {})", meta.version, CATALOG_VERSION);
    }
    let postings = load_postings(paths)?;
    Ok(Catalog { postings, meta })
}
