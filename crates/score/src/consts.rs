use std::collections::HashMap;
use std::sync::LazyLock;

/// Score for an extension that has no entry in [`EXTENSION_SCORES`].
pub(crate) const DEFAULT_EXTENSION_SCORE: f64 = 100.0;

/// Lowest score [`extension_type_score`](crate::extension_type_score) will return.
pub(crate) const MIN_EXTENSION_TYPE_SCORE: f64 = 10.0;

/// Share of the type score folded into a derived extension score.
pub(crate) const TYPE_SCORE_SHARE: f64 = 0.25;

/// Weighting of the type score in [`combined_score`](crate::combined_score).
pub(crate) const TYPE_SCORE_WEIGHT: f64 = 1.5;

/// Preference for extensions, reflecting how common each one is in the wild.
/// Keys are lower-case and have no leading dot.
pub(crate) static EXTENSION_SCORES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        // Images
        ("jpg", 950.0),
        ("jpeg", 940.0),
        ("png", 900.0),
        ("svg", 880.0),
        ("webp", 860.0),
        ("avif", 820.0),
        ("heic", 780.0),
        ("heif", 770.0),
        ("gif", 700.0),
        ("ico", 650.0),
        ("tif", 420.0),
        ("tiff", 410.0),
        ("bmp", 250.0),
        // Documents
        ("pdf", 980.0),
        ("txt", 880.0),
        ("text", 860.0),
        ("md", 820.0),
        ("html", 780.0),
        ("htm", 760.0),
        ("shtml", 750.0),
        ("docx", 750.0),
        ("xlsx", 730.0),
        ("pptx", 720.0),
        ("json", 740.0),
        ("csv", 700.0),
        ("tsv", 680.0),
        ("odt", 650.0),
        ("ods", 640.0),
        ("odp", 630.0),
        ("yaml", 600.0),
        ("yml", 590.0),
        ("doc", 540.0),
        ("rtf", 520.0),
        ("xls", 500.0),
        ("ppt", 500.0),
        ("epub", 500.0),
        // Audio
        ("mp3", 960.0),
        ("m4a", 820.0),
        ("flac", 760.0),
        ("opus", 650.0),
        ("aac", 640.0),
        ("ogg", 600.0),
        ("wav", 520.0),
        // Video
        ("mp4", 970.0),
        ("webm", 840.0),
        ("m4v", 780.0),
        ("mkv", 760.0),
        ("hevc", 720.0),
        ("mov", 650.0),
        ("avi", 320.0),
        // Archives & compression
        ("zip", 950.0),
        ("gz", 820.0),
        ("tgz", 810.0),
        ("tar", 800.0),
        ("7z", 760.0),
        ("bz2", 700.0),
        ("tbz", 690.0),
        ("rar", 640.0),
        // Fonts
        ("woff2", 920.0),
        ("woff", 880.0),
        ("ttf", 820.0),
        ("otf", 800.0),
        ("eot", 300.0),
        // Code
        ("js", 900.0),
        ("mjs", 880.0),
        ("ts", 870.0),
        ("tsx", 860.0),
        ("jsx", 850.0),
        ("css", 830.0),
        ("php", 750.0),
        ("py", 750.0),
        ("java", 700.0),
        ("go", 700.0),
        ("rb", 620.0),
        ("cs", 600.0),
        ("c", 580.0),
        ("h", 570.0),
        ("cpp", 560.0),
        ("hpp", 550.0),
        ("class", 300.0),
        // Binary & generic
        ("iso", 420.0),
        ("bin", 260.0),
        ("dat", 220.0),
        ("exe", 200.0),
        ("dll", 150.0),
    ])
});
