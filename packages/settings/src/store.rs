// ABOUTME: Typed setting accessors with a read-through cache
// ABOUTME: Each slot is read from storage at most once; writes go through to disk

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::storage::SettingsStorage;
use crate::theme::{is_dark, ColorSchemeProbe};
use crate::types::{SettingEntry, SettingKey, Theme};
use crate::validation::{parse_setting_value, validate_setting_value};
use crate::{Result, SettingsError};

/// A named setting slot with a typed default
pub struct Setting<T> {
    key: SettingKey,
    default: fn() -> T,
}

impl<T> Setting<T> {
    pub const fn new(key: SettingKey, default: fn() -> T) -> Self {
        Self { key, default }
    }

    pub fn key(&self) -> SettingKey {
        self.key
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

impl<T> Clone for Setting<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setting<T> {}

fn default_theme() -> Theme {
    Theme::Auto
}

fn default_auto_recompile() -> bool {
    true
}

fn default_auto_recompile_delay() -> u32 {
    500
}

fn default_code_font_size() -> u32 {
    11
}

fn default_monospace_font() -> Option<String> {
    None
}

fn default_code_line_height() -> f64 {
    1.5
}

fn default_code_color_scheme() -> String {
    "Frog Dark".to_string()
}

pub const THEME: Setting<Theme> = Setting::new(SettingKey::Theme, default_theme);
pub const AUTO_RECOMPILE: Setting<bool> =
    Setting::new(SettingKey::AutoRecompile, default_auto_recompile);
pub const AUTO_RECOMPILE_DELAY: Setting<u32> =
    Setting::new(SettingKey::AutoRecompileDelay, default_auto_recompile_delay);
pub const CODE_FONT_SIZE: Setting<u32> =
    Setting::new(SettingKey::CodeFontSize, default_code_font_size);
pub const MONOSPACE_FONT: Setting<Option<String>> =
    Setting::new(SettingKey::MonospaceFont, default_monospace_font);
pub const CODE_LINE_HEIGHT: Setting<f64> =
    Setting::new(SettingKey::CodeLineHeight, default_code_line_height);
pub const CODE_COLOR_SCHEME: Setting<String> =
    Setting::new(SettingKey::CodeColorScheme, default_code_color_scheme);

/// Settings backed by the settings table
///
/// The cache maps a key to the raw JSON stored for it (`None` when the slot
/// is empty), so an unset slot is also only queried once. Cache misses and
/// writes both hold the write guard across their storage call, so the cache
/// always reflects the last write.
pub struct SettingsStore {
    storage: SettingsStorage,
    cache: RwLock<HashMap<SettingKey, Option<String>>>,
}

impl SettingsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            storage: SettingsStorage::new(pool),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn theme(&self) -> SettingHandle<'_, Theme> {
        self.handle(THEME)
    }

    pub fn auto_recompile(&self) -> SettingHandle<'_, bool> {
        self.handle(AUTO_RECOMPILE)
    }

    pub fn auto_recompile_delay(&self) -> SettingHandle<'_, u32> {
        self.handle(AUTO_RECOMPILE_DELAY)
    }

    pub fn code_font_size(&self) -> SettingHandle<'_, u32> {
        self.handle(CODE_FONT_SIZE)
    }

    pub fn monospace_font(&self) -> SettingHandle<'_, Option<String>> {
        self.handle(MONOSPACE_FONT)
    }

    pub fn code_line_height(&self) -> SettingHandle<'_, f64> {
        self.handle(CODE_LINE_HEIGHT)
    }

    pub fn code_color_scheme(&self) -> SettingHandle<'_, String> {
        self.handle(CODE_COLOR_SCHEME)
    }

    pub fn handle<T>(&self, setting: Setting<T>) -> SettingHandle<'_, T> {
        SettingHandle {
            store: self,
            setting,
        }
    }

    /// Whether the site renders dark, resolving `auto` through `probe`
    pub async fn is_site_theme_dark(&self, probe: &dyn ColorSchemeProbe) -> Result<bool> {
        let theme = self.theme().get().await?;
        Ok(is_dark(theme, probe))
    }

    /// Read a typed setting, falling back to its default when the slot is empty
    pub async fn get<T: DeserializeOwned>(&self, setting: &Setting<T>) -> Result<T> {
        match self.load_raw(setting.key()).await? {
            None => Ok(setting.default_value()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                warn!(key = %setting.key(), value = %raw, error = %e, "Stored setting does not decode");
                SettingsError::InvalidStoredValue {
                    key: setting.key(),
                    value: raw,
                }
            }),
        }
    }

    /// Persist a typed setting
    pub async fn set<T: Serialize>(&self, setting: &Setting<T>, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.write_value(setting.key(), value).await
    }

    /// Parse and persist a value given as text, returning what was stored
    pub async fn set_raw(&self, key: SettingKey, raw: &str) -> Result<Value> {
        let value = parse_setting_value(key, raw)?;
        self.write_value(key, value.clone()).await?;
        Ok(value)
    }

    /// Clear a slot so the next read yields the default
    pub async fn reset(&self, key: SettingKey) -> Result<()> {
        let mut cache = self.cache.write().await;
        let existed = self.storage.delete(key).await?;
        cache.insert(key, None);
        drop(cache);
        info!(key = %key, existed, "Setting reset to default");
        Ok(())
    }

    /// Effective JSON value of a slot (stored or default)
    ///
    /// A stored value that would not pass `set` is reported the same way the
    /// typed accessors report it.
    pub async fn get_value(&self, key: SettingKey) -> Result<Value> {
        let raw = match self.load_raw(key).await? {
            None => return Ok(key.default_value()),
            Some(raw) => raw,
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) if validate_setting_value(key, &value).is_ok() => Ok(value),
            _ => {
                warn!(key = %key, value = %raw, "Stored setting is not a valid value");
                Err(SettingsError::InvalidStoredValue { key, value: raw })
            }
        }
    }

    /// Every recognised setting with its effective value
    pub async fn entries(&self) -> Result<Vec<SettingEntry>> {
        self.load_all().await?;

        let mut entries = Vec::with_capacity(SettingKey::ALL.len());
        for key in SettingKey::ALL {
            let is_default = self.load_raw(key).await?.is_none();
            entries.push(SettingEntry {
                key,
                value: self.get_value(key).await?,
                is_default,
            });
        }
        Ok(entries)
    }

    /// Fill every cold slot from a single table scan
    async fn load_all(&self) -> Result<()> {
        let mut cache = self.cache.write().await;
        if SettingKey::ALL.iter().all(|key| cache.contains_key(key)) {
            return Ok(());
        }

        let stored: HashMap<SettingKey, String> =
            self.storage.get_all().await?.into_iter().collect();
        debug!(stored = stored.len(), "Loaded all settings from storage");

        for key in SettingKey::ALL {
            cache
                .entry(key)
                .or_insert_with(|| stored.get(&key).cloned());
        }
        Ok(())
    }

    async fn write_value(&self, key: SettingKey, value: Value) -> Result<()> {
        validate_setting_value(key, &value)?;

        let raw = value.to_string();
        let mut cache = self.cache.write().await;
        self.storage.put(key, &raw).await?;
        cache.insert(key, Some(raw));
        drop(cache);

        info!(key = %key, value = %value, "Setting updated");
        Ok(())
    }

    async fn load_raw(&self, key: SettingKey) -> Result<Option<String>> {
        if let Some(cached) = self.cache.read().await.get(&key) {
            return Ok(cached.clone());
        }

        // A write may have filled the slot while the read guard was released
        let mut cache = self.cache.write().await;
        if let Some(cached) = cache.get(&key) {
            return Ok(cached.clone());
        }

        debug!(key = %key, "Loading setting from storage");
        let raw = self.storage.get(key).await?;
        cache.insert(key, raw.clone());
        Ok(raw)
    }
}

/// Current-value/setter pair for one setting
pub struct SettingHandle<'a, T> {
    store: &'a SettingsStore,
    setting: Setting<T>,
}

impl<T: Serialize + DeserializeOwned> SettingHandle<'_, T> {
    pub fn key(&self) -> SettingKey {
        self.setting.key()
    }

    pub async fn get(&self) -> Result<T> {
        self.store.get(&self.setting).await
    }

    pub async fn set(&self, value: T) -> Result<()> {
        self.store.set(&self.setting, &value).await
    }

    pub async fn reset(&self) -> Result<()> {
        self.store.reset(self.setting.key()).await
    }
}
