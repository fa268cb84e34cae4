use crate::domain::media::{Audio, Image, MediaRef};

/// One clue shown to the players: plain text or a media reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Image(Image),
    Audio(Audio),
}

impl Content {
    pub fn media(&self) -> Option<&MediaRef> {
        match self {
            Content::Text(_) => None,
            Content::Image(image) => Some(image.media()),
            Content::Audio(audio) => Some(audio.media()),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Image> for Content {
    fn from(image: Image) -> Self {
        Content::Image(image)
    }
}

impl From<Audio> for Content {
    fn from(audio: Audio) -> Self {
        Content::Audio(audio)
    }
}

/// Ordered content sequence. A single value always becomes a one-element sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contents(Vec<Content>);

impl Contents {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Content> {
        self.0.iter()
    }

    pub fn media(&self) -> impl Iterator<Item = &MediaRef> {
        self.0.iter().filter_map(Content::media)
    }
}

impl<'a> IntoIterator for &'a Contents {
    type Item = &'a Content;
    type IntoIter = std::slice::Iter<'a, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Content> for Contents {
    fn from(content: Content) -> Self {
        Self(vec![content])
    }
}

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Content::from(text).into()
    }
}

impl From<String> for Contents {
    fn from(text: String) -> Self {
        Content::from(text).into()
    }
}

impl From<Image> for Contents {
    fn from(image: Image) -> Self {
        Content::from(image).into()
    }
}

impl From<Audio> for Contents {
    fn from(audio: Audio) -> Self {
        Content::from(audio).into()
    }
}

impl<T: Into<Content>> From<Vec<T>> for Contents {
    fn from(items: Vec<T>) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>> FromIterator<T> for Contents {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_becomes_one_element_sequence() {
        let single: Contents = Image::new("mars.jpg").into();
        let list: Contents = vec![Content::from(Image::new("mars.jpg"))].into();
        assert_eq!(single, list);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_media_skips_text_and_keeps_order() {
        let contents: Contents = vec![
            Content::from("Name the artist"),
            Audio::new("rapgod.mp3").into(),
            Image::new("cover.jpg").into(),
        ]
        .into();

        let names: Vec<&str> = contents.media().map(|m| m.file_name()).collect();
        assert_eq!(names, vec!["rapgod.mp3", "cover.jpg"]);
    }
}
