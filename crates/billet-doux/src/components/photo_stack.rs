//! Polaroid photo stack.
//!
//! Photos render stacked with alternating tilt; the front photo sits
//! straight. Keyed by photo identity so rotation animates reordering
//! instead of repainting.

use dioxus::prelude::*;

use crate::state::Photo;

/// Front photo sits straight, the rest alternate tilt by depth.
fn polaroid_class(index: usize) -> &'static str {
    if index == 0 {
        "polaroid polaroid-front"
    } else if index % 2 == 0 {
        "polaroid polaroid-tilt-right"
    } else {
        "polaroid polaroid-tilt-left"
    }
}

#[component]
pub fn PhotoStack(photos: Vec<Photo>, caption: String) -> Element {
    let count = photos.len();

    rsx! {
        div { class: "photo-stack",
            for (index, photo) in photos.iter().enumerate() {
                div {
                    key: "{photo.key}",
                    class: "{polaroid_class(index)}",
                    style: "z-index: {count - index}; --stack-depth: {index};",

                    img {
                        class: "photo",
                        src: "{photo.src}",
                        alt: "{caption}",
                    }
                    div { class: "photo-caption script-font", "{caption}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_photo_sits_straight() {
        assert_eq!(polaroid_class(0), "polaroid polaroid-front");
    }

    #[test]
    fn test_tilt_alternates_behind_the_front() {
        assert_eq!(polaroid_class(1), "polaroid polaroid-tilt-left");
        assert_eq!(polaroid_class(2), "polaroid polaroid-tilt-right");
        assert_eq!(polaroid_class(3), "polaroid polaroid-tilt-left");
    }
}
