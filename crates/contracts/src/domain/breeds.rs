/// Базовый адрес сервиса картинок-заглушек (400x300, поиск по ключевому слову)
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://source.unsplash.com/400x300/?";

/// Порода собаки. Имя служит ключом в списке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    pub name: &'static str,
    pub temperament: &'static str,
}

pub const BREEDS: [Breed; 6] = [
    Breed {
        name: "Labrador Retriever",
        temperament: "Friendly and outgoing",
    },
    Breed {
        name: "German Shepherd",
        temperament: "Intelligent and versatile",
    },
    Breed {
        name: "Golden Retriever",
        temperament: "Loyal and gentle",
    },
    Breed {
        name: "French Bulldog",
        temperament: "Adaptable and playful",
    },
    Breed {
        name: "Bulldog",
        temperament: "Calm and courageous",
    },
    Breed {
        name: "Poodle",
        temperament: "Elegant and intelligent",
    },
];

impl Breed {
    /// Ключевое слово для сервиса картинок: нижний регистр, только первый пробел меняется на `-`
    pub fn image_slug(&self) -> String {
        self.name.to_lowercase().replacen(' ', "-", 1)
    }

    pub fn image_url(&self) -> String {
        format!(
            "{}{}",
            PLACEHOLDER_IMAGE_BASE,
            urlencoding::encode(&self.image_slug())
        )
    }

    pub fn image_alt(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_names() {
        let names: Vec<&str> = BREEDS.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec![
                "Labrador Retriever",
                "German Shepherd",
                "Golden Retriever",
                "French Bulldog",
                "Bulldog",
                "Poodle",
            ]
        );
    }

    #[test]
    fn test_names_are_unique_keys() {
        let mut names: Vec<&str> = BREEDS.iter().map(|b| b.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BREEDS.len());
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            BREEDS[0].image_url(),
            "https://source.unsplash.com/400x300/?labrador-retriever"
        );
        assert_eq!(
            BREEDS[5].image_url(),
            "https://source.unsplash.com/400x300/?poodle"
        );
    }

    #[test]
    fn test_image_slug_replaces_first_space_only() {
        let breed = Breed {
            name: "Cavalier King Charles",
            temperament: "Affectionate",
        };
        assert_eq!(breed.image_slug(), "cavalier-king charles");
        assert_eq!(
            breed.image_url(),
            "https://source.unsplash.com/400x300/?cavalier-king%20charles"
        );
    }
}
