pub mod details;
pub mod list;

/// Ссылку на ролик YouTube переводит в адрес для iframe; прочие ссылки как есть
pub fn video_embed_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if url.contains("youtube.com/watch?v=") {
        return Some(url.replacen("watch?v=", "embed/", 1));
    }
    if url.contains("youtu.be/") {
        return Some(url.replacen("youtu.be/", "youtube.com/embed/", 1));
    }
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_embed_url() {
        assert_eq!(
            video_embed_url("https://www.youtube.com/watch?v=abc").as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
        assert_eq!(
            video_embed_url("https://youtu.be/abc").as_deref(),
            Some("https://youtube.com/embed/abc")
        );
        assert_eq!(
            video_embed_url("https://vimeo.com/1").as_deref(),
            Some("https://vimeo.com/1")
        );
        assert_eq!(video_embed_url("  "), None);
    }
}
