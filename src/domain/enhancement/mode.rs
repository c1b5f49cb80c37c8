// SPDX-License-Identifier: MPL-2.0
//! Enhancement styles and their instruction templates.

use std::fmt;
use std::str::FromStr;

const GENERAL_INSTRUCTION: &str = "Act as a professional photo editor. Your task is to enhance the provided image with the highest possible quality. Follow these steps: 1. **Clarity and Sharpness:** Significantly increase the image clarity and sharpness. Bring out fine details without creating artificial halos or artifacts. 2. **Color Correction:** Adjust the color balance to be natural and vibrant. Enhance saturation and contrast, making the colors pop while maintaining realism. Correct any color casts. 3. **Lighting and Exposure:** Optimize the lighting. Adjust exposure, highlights, and shadows to create a well-balanced image with good dynamic range. Avoid clipping highlights or crushing blacks. 4. **Noise and Blur Reduction:** Intelligently remove any noise, grain, or blurriness. The final image should be clean and smooth. 5. **High-Resolution Effect:** Upscale the image quality to simulate a high-resolution photograph. The final result should be a dramatically improved, professional-grade photograph. Do not add, remove, or change any objects in the image.";

const FACE_INSTRUCTION: &str = "Act as an expert portrait retoucher. Your goal is to enhance the human face in this image to a professional studio quality. Follow these steps meticulously: 1. **Face Reconstruction:** Focus on the face. Reconstruct fine details in the eyes, hair, and skin texture. Sharpen eyelashes and eyebrows. 2. **Skin Enhancement:** Create natural, smooth skin texture. Subtly remove blemishes, acne, and uneven skin tones while preserving natural pores. Do not make it look plastic or artificial. 3. **Eye Enhancement:** Make the eyes clearer and brighter. Enhance the color of the iris and add a subtle glint to make them pop. 4. **Lighting:** Adjust the lighting on the face to be more flattering. Add soft highlights and balanced shadows to create depth and dimension. 5. **Overall Polish:** Perform a final pass for color correction and noise reduction for the entire image, ensuring the subject stands out. The result should be a stunning, high-definition portrait.";

const LANDSCAPE_INSTRUCTION: &str = "Act as a professional landscape photographer editing a prize-winning photo. Your goal is to make this scene breathtaking. Follow these steps: 1. **Dynamic Range:** Dramatically enhance the dynamic range. Recover details from the highlights (like clouds in the sky) and shadows. 2. **Color Vibrancy:** Boost the colors to be rich and vibrant, but realistic. Enhance the blues of the sky and water, the greens of foliage, and the warm tones of sunsets/sunrises. 3. **Atmospheric Depth:** Increase the sense of depth and scale. Add a slight haze or clarity effect to distinguish between foreground, midground, and background elements. 4. **Sharpness and Detail:** Sharpen key elements like mountains, trees, and architectural details to make them crisp and clear. 5. **Sky Enhancement:** Pay special attention to the sky. Make clouds more defined and dramatic. If it's a clear sky, make the color gradient smooth and beautiful. The final image should look immersive and awe-inspiring.";

/// Enhancement style selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnhancementMode {
    General,
    Face,
    Landscape,
}

impl EnhancementMode {
    /// All modes, in the order the selector presents them.
    pub const ALL: [EnhancementMode; 3] = [
        EnhancementMode::Face,
        EnhancementMode::Landscape,
        EnhancementMode::General,
    ];

    /// Stable identifier (`general`, `face`, `landscape`).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            EnhancementMode::General => "general",
            EnhancementMode::Face => "face",
            EnhancementMode::Landscape => "landscape",
        }
    }

    /// Instruction template sent to the enhancement service with the image.
    #[must_use]
    pub fn instruction(self) -> &'static str {
        match self {
            EnhancementMode::General => GENERAL_INSTRUCTION,
            EnhancementMode::Face => FACE_INSTRUCTION,
            EnhancementMode::Landscape => LANDSCAPE_INSTRUCTION,
        }
    }

    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            EnhancementMode::General => "mode-general-title",
            EnhancementMode::Face => "mode-face-title",
            EnhancementMode::Landscape => "mode-landscape-title",
        }
    }

    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            EnhancementMode::General => "mode-general-description",
            EnhancementMode::Face => "mode-face-description",
            EnhancementMode::Landscape => "mode-landscape-description",
        }
    }
}

impl fmt::Display for EnhancementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing an unknown mode identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enhancement mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for EnhancementMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(EnhancementMode::General),
            "face" => Ok(EnhancementMode::Face),
            "landscape" => Ok(EnhancementMode::Landscape),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}
