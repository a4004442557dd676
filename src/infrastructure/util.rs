use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_titles() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("A Title"), "a-title");
        assert_eq!(slugger.slugify("  Über  Café! "), "uber-cafe");
        assert_eq!(slugger.slugify("!!!"), "");
    }
}
