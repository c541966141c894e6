//! User-facing strings, all in the interface language (Arabic).
//!
//! Technical detail goes to tracing; these are what the teacher sees.

use std::fmt::Display;

pub const EMPTY_INPUT: &str = "الرجاء إدخال وصف للمحتوى المطلوب قبل الإنشاء.";

pub const UNKNOWN_TOOL: &str = "عذرًا، الأداة المطلوبة غير متوفرة.";

/// Lyrics were generated; one or both audio tracks were not.
pub const SONG_AUDIO_FAILED: &str =
    "تم إنشاء كلمات الأغنية بنجاح، ولكن حدث خطأ أثناء توليد الصوت.";

pub fn generation_failed(detail: impl Display) -> String {
    format!("عذرًا، حدث خطأ أثناء إنشاء المحتوى. {detail}")
}
