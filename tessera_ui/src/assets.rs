// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the asset system and the color type shared by widgets.

use alloc::sync::Arc;
use core::fmt;

use kurbo::Size;
use tessera_text::FontMetrics;

/// Handle of an asset owned by the host's asset system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle(pub u64);

/// Handle of a host script registered as a callback.
///
/// Firing a callback queues a [`UiEvent`](crate::UiEvent) carrying the
/// handle; the host runs the script after draining the queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScriptHandle(pub u64);

/// Renderer-side texture reference resolved from an [`AssetHandle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureRef(pub u64);

/// A loaded font: glyph metrics plus the atlas texture its quads sample.
#[derive(Clone)]
pub struct FontRef {
    /// Glyph metrics.
    pub metrics: Arc<dyn FontMetrics>,
    /// Atlas texture, if the font renders through one.
    pub atlas: Option<TextureRef>,
}

impl FontRef {
    /// Wrap a metrics provider.
    pub fn new(metrics: impl FontMetrics + 'static, atlas: Option<TextureRef>) -> Self {
        Self {
            metrics: Arc::new(metrics),
            atlas,
        }
    }
}

impl fmt::Debug for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRef")
            .field("line_height", &self.metrics.line_height())
            .field("atlas", &self.atlas)
            .finish_non_exhaustive()
    }
}

/// Lookup of assets by handle.
///
/// Both lookups are fallible: handles may reference deleted assets.
pub trait AssetProvider {
    /// Texture for `handle`.
    fn texture(&self, handle: AssetHandle) -> Option<TextureRef>;

    /// Font for `handle`.
    fn font(&self, handle: AssetHandle) -> Option<FontRef>;

    /// Pixel size of the texture behind `handle`, if known.
    ///
    /// Images with a fixed aspect ratio are letterboxed using this size.
    fn texture_size(&self, handle: AssetHandle) -> Option<Size> {
        let _ = handle;
        None
    }
}

/// Provider that resolves nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoAssets;

impl AssetProvider for NoAssets {
    fn texture(&self, _: AssetHandle) -> Option<TextureRef> {
        None
    }

    fn font(&self, _: AssetHandle) -> Option<FontRef> {
        None
    }
}

/// Linear RGBA color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::gray(1.0);

    /// Create a color from components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A color with every component, alpha included, set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::rgba(v, v, v, v)
    }

    /// Opaque gray.
    pub const fn gray(v: f32) -> Self {
        Self::rgba(v, v, v, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::splat(0.5)
    }
}
