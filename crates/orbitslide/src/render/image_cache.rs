use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context as _, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

/// What a caller can draw for an image source right now.
#[derive(Clone)]
pub enum ImageState {
    Loading,
    Ready(TextureHandle),
    Failed,
}

type Loaded = (u64, String, Result<ColorImage>);

/// Slide images keyed by a hash of their source, so inlined `data:` URLs are
/// not held twice. Remote images are fetched on a background thread; each
/// source is requested once until [`ImageCache::retain`] drops it.
pub struct ImageCache {
    base_dir: Option<PathBuf>,
    entries: RefCell<HashMap<u64, ImageState>>,
    sender: Sender<Loaded>,
    receiver: Receiver<Loaded>,
}

impl ImageCache {
    /// `base_dir` resolves relative file paths (the directory of the opened deck).
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            base_dir,
            entries: RefCell::new(HashMap::new()),
            sender,
            receiver,
        }
    }

    pub fn get(&self, ctx: &egui::Context, source: &str) -> ImageState {
        self.receive(ctx);

        let key = source_key(source);
        let mut entries = self.entries.borrow_mut();
        if let Some(state) = entries.get(&key) {
            return state.clone();
        }
        entries.insert(key, ImageState::Loading);
        drop(entries);

        let source = source.to_string();
        let base_dir = self.base_dir.clone();
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = read_source(&source, base_dir.as_deref()).and_then(|bytes| decode(&bytes));
            // The receiver only goes away with the cache itself.
            let _ = sender.send((key, source, result));
            ctx.request_repaint();
        });
        ImageState::Loading
    }

    /// Drop every entry whose source is not in `sources`, releasing its texture.
    /// Loads still in flight for dropped sources are discarded on arrival.
    pub fn retain<'a>(&self, sources: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<u64> = sources.into_iter().map(source_key).collect();
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|key, _| keep.contains(key));
        if entries.len() < before {
            log::debug!("Evicted {} unused images", before - entries.len());
        }
    }

    /// True while any image is still being fetched.
    pub fn is_loading(&self) -> bool {
        self.entries
            .borrow()
            .values()
            .any(|state| matches!(state, ImageState::Loading))
    }

    fn receive(&self, ctx: &egui::Context) {
        let mut entries = self.entries.borrow_mut();
        while let Ok((key, source, result)) = self.receiver.try_recv() {
            if !entries.contains_key(&key) {
                log::debug!("Discarding evicted image {}", short(&source));
                continue;
            }
            let state = match result {
                Ok(image) => {
                    log::debug!("Loaded image {}", short(&source));
                    ImageState::Ready(ctx.load_texture(
                        short(&source),
                        image,
                        TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::warn!("Failed to load image {}: {e:#}", short(&source));
                    ImageState::Failed
                }
            };
            entries.insert(key, state);
        }
    }
}

/// Raw bytes behind an image source: `http(s)` URL, `data:` URL or file path.
pub fn read_source(source: &str, base_dir: Option<&Path>) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let mut response = ureq::get(source)
            .call()
            .with_context(|| format!("GET {source}"))?;
        return Ok(response.body_mut().read_to_vec()?);
    }
    if source.starts_with("data:") {
        return decode_data_url(source);
    }

    let path = Path::new(source);
    let path = match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    };
    std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Payload of a base64 `data:` URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let Some((header, payload)) = url.split_once(',') else {
        bail!("Malformed data URL");
    };
    if !header.ends_with(";base64") {
        bail!("Only base64 data URLs are supported");
    }
    STANDARD
        .decode(payload.trim())
        .context("Invalid base64 in data URL")
}

/// Inline a local image file as a `data:` URL, the form slides store for
/// uploaded images.
pub fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn decode(bytes: &[u8]) -> Result<ColorImage> {
    let image = image::load_from_memory(bytes).context("Unsupported image data")?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn source_key(source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}

/// Texture name for logs; data URLs are truncated.
fn short(source: &str) -> String {
    match source.char_indices().nth(64) {
        Some((end, _)) => format!("{}...", &source[..end]),
        None => source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let bytes = decode_data_url("data:text/plain;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_data_url_rejects_plain() {
        assert!(decode_data_url("data:text/plain,hello").is_err());
        assert!(decode_data_url("data:nothing").is_err());
    }

    #[test]
    fn test_file_to_data_url_round_trip() {
        let path = std::env::temp_dir().join(format!("orbitslide-{}.png", std::process::id()));
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        let url = file_to_data_url(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(read_source(&url, None).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_relative_path_uses_base_dir() {
        let dir = std::env::temp_dir();
        let name = format!("orbitslide-rel-{}.bin", std::process::id());
        std::fs::write(dir.join(&name), b"x").unwrap();
        let bytes = read_source(&name, Some(&dir)).unwrap();
        std::fs::remove_file(dir.join(&name)).unwrap();
        assert_eq!(bytes, b"x");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(b"not an image").is_err());
    }

    #[test]
    fn test_retain_evicts_unreferenced_sources() {
        let ctx = egui::Context::default();
        let cache = ImageCache::new(None);
        let old = format!("data:image/png;base64,{}", "A".repeat(4096));
        let kept = "data:text/plain,kept";
        cache.get(&ctx, &old);
        cache.get(&ctx, kept);
        assert_eq!(cache.entries.borrow().len(), 2);

        cache.retain([kept]);
        assert_eq!(cache.entries.borrow().len(), 1);
        cache.retain(std::iter::empty());
        assert_eq!(cache.entries.borrow().len(), 0);
        assert!(!cache.is_loading());
    }

    #[test]
    fn test_evicted_load_is_not_reinserted() {
        let ctx = egui::Context::default();
        let cache = ImageCache::new(None);
        let source = "data:nothing";
        let key = source_key(source);
        cache.get(&ctx, source);
        cache.retain(std::iter::empty());

        cache
            .sender
            .send((key, source.to_string(), Err(anyhow::anyhow!("late"))))
            .unwrap();
        cache.receive(&ctx);
        assert_eq!(cache.entries.borrow().len(), 0);
    }

    #[test]
    fn test_source_key_is_stable() {
        assert_eq!(source_key("a.png"), source_key("a.png"));
        assert_ne!(source_key("a.png"), source_key("b.png"));
    }

    #[test]
    fn test_short_truncates_long_sources() {
        let long = format!("data:image/png;base64,{}", "A".repeat(200));
        assert_eq!(short(&long).len(), 67);
        assert_eq!(short("a.png"), "a.png");
    }
}
