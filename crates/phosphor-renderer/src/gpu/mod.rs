mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_asset_display() {
        let err = RendererError::AssetError("frame_03.png: bad header".to_string());
        assert_eq!(err.to_string(), "asset error: frame_03.png: bad header");
    }

    #[test]
    fn renderer_error_into_phosphor_error() {
        let err: phosphor_common::PhosphorError = RendererError::AdapterNotFound.into();
        assert_eq!(
            err.to_string(),
            "renderer error: no suitable GPU adapter found"
        );
    }

    #[test]
    fn prefers_linear_format() {
        let formats = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Bgra8Unorm,
        ];
        assert_eq!(pick_surface_format(&formats), wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(
            pick_surface_format(&formats[..1]),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
        assert_eq!(pick_surface_format(&[]), wgpu::TextureFormat::Bgra8Unorm);
    }
}
