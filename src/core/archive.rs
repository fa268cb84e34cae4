use crate::adapters::{LocalStorage, SystemStamper};
use crate::core::render::render_pack;
use crate::domain::media::MediaKind;
use crate::domain::model::Pack;
use crate::domain::ports::{PackStamper, Storage};
use crate::utils::error::{PackError, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::{FileOptions, ZipWriter};

pub const DEFAULT_PACKAGE_PATH: &str = "package.siq";
pub const CONTENT_ENTRY: &str = "content.xml";

/// Renders a pack and bundles it with its media into a `.siq` archive.
pub struct PackageWriter<S: Storage, T: PackStamper> {
    storage: S,
    stamper: T,
}

impl<S: Storage, T: PackStamper> PackageWriter<S, T> {
    pub fn new(storage: S, stamper: T) -> Self {
        Self { storage, stamper }
    }

    /// Reads every referenced media file once, keyed by its archive entry.
    ///
    /// A repeated file name is accepted when it points at the same path or at identical bytes;
    /// anything else is a `MediaNameCollision`.
    pub fn collect_media(&self, pack: &Pack) -> Result<Vec<(String, Vec<u8>)>> {
        let mut seen: HashMap<(MediaKind, &str), (&Path, usize)> = HashMap::new();
        let mut entries: Vec<(String, Vec<u8>)> = Vec::new();

        for media in pack.collect_media() {
            let entry = media.archive_path()?;
            let key = (media.kind(), media.file_name());

            match seen.get(&key).copied() {
                Some((first, _)) if first == media.path() => {
                    tracing::debug!("Skipping repeated {} reference: {}", media.kind(), entry);
                }
                Some((first, index)) => {
                    let data = self.storage.read_file(media.path())?;
                    if data != entries[index].1 {
                        return Err(PackError::MediaNameCollision {
                            kind: media.kind(),
                            file_name: media.file_name().to_string(),
                            first: first.to_path_buf(),
                            second: media.path().to_path_buf(),
                        });
                    }
                    tracing::debug!(
                        "{} and {} have identical contents, storing {} once",
                        first.display(),
                        media.path().display(),
                        entry
                    );
                }
                None => {
                    let data = self.storage.read_file(media.path())?;
                    seen.insert(key, (media.path(), entries.len()));
                    entries.push((entry, data));
                }
            }
        }

        Ok(entries)
    }

    /// 建立封包內容（記憶體中），成功後才寫入目的地
    pub fn build(&self, pack: &Pack) -> Result<Vec<u8>> {
        let media = self.collect_media(pack)?;
        let xml = render_pack(pack, &self.stamper)?;

        tracing::debug!(
            "Creating package '{}' with {} media files",
            pack.name,
            media.len()
        );

        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        zip.start_file::<_, ()>(CONTENT_ENTRY, FileOptions::default())?;
        zip.write_all(xml.as_bytes())?;

        zip.add_directory::<_, ()>(
            format!("{}/", MediaKind::Image.directory()),
            FileOptions::default(),
        )?;
        zip.add_directory::<_, ()>(
            format!("{}/", MediaKind::Audio.directory()),
            FileOptions::default(),
        )?;

        for (entry, data) in media {
            tracing::debug!("Adding {} ({} bytes)", entry, data.len());

            zip.start_file::<_, ()>(entry, FileOptions::default())?;
            zip.write_all(&data)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    pub fn write(&self, pack: &Pack, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let destination = destination.as_ref();
        let data = self.build(pack)?;

        tracing::debug!(
            "Writing package ({} bytes) to {}",
            data.len(),
            destination.display()
        );
        self.storage.write_file(destination, &data)?;

        Ok(destination.to_path_buf())
    }
}

impl Default for PackageWriter<LocalStorage, SystemStamper> {
    fn default() -> Self {
        Self::new(LocalStorage::new(), SystemStamper)
    }
}

impl Pack {
    /// Renders `content.xml` with a fresh id and today's date.
    pub fn render(&self) -> Result<String> {
        render_pack(self, &SystemStamper)
    }

    pub fn save(&self, destination: impl AsRef<Path>) -> Result<PathBuf> {
        PackageWriter::default().write(self, destination)
    }

    pub fn save_default(&self) -> Result<PathBuf> {
        self.save(DEFAULT_PACKAGE_PATH)
    }
}
