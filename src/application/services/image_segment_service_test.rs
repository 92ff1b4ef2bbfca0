#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::application::services::image_segment_service::ImageSegmentService;
    use crate::application::services::seed_normalizer::is_numeric_seed;
    use crate::domain::entities::{ConvertConfig, Segment, WhitelistRule};
    use crate::domain::ports::mocks::MockSeedSource;
    use crate::infrastructure::ClockSeedSource;

    fn service(config: ConvertConfig) -> ImageSegmentService {
        ImageSegmentService::new(config, Arc::new(ClockSeedSource::new()))
    }

    fn seed_of(url: &str) -> &str {
        url.split_once("seed=")
            .map(|(_, rest)| rest.split(['&', '#']).next().unwrap_or_default())
            .unwrap()
    }

    #[test]
    fn test_markdown_image_with_random_seed() {
        let conversion = service(ConvertConfig::default())
            .convert("check this ![x](https://a.com/pic.png?seed=random)");
        let segments = conversion.segments();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::plain("check this "));

        let Segment::Image { url } = &segments[1] else {
            panic!("Expected image segment");
        };
        assert!(url.starts_with("https://a.com/pic.png?seed="));
        assert!(is_numeric_seed(seed_of(url)));
    }

    #[test]
    fn test_non_image_link_is_unchanged() {
        let text = "visit https://a.com/page.html";
        let conversion = service(ConvertConfig::default()).convert(text);

        assert_eq!(conversion.segments(), &[Segment::plain(text)]);
        assert!(!conversion.has_images());
    }

    #[test]
    fn test_numeric_seed_is_byte_identical() {
        let url = "https://a.com/pic.png?seed=42&w=512";
        let conversion = service(ConvertConfig::default()).convert(&format!("![x]({url})"));

        assert_eq!(conversion.segments(), &[Segment::image(url)]);
    }

    #[test]
    fn test_whitelisted_bare_url() {
        let config = ConvertConfig {
            whitelist_rules: vec![WhitelistRule::new("img.example.com", "/gen/")],
            ..ConvertConfig::default()
        };

        let conversion = service(config).convert("https://img.example.com/gen/abc");
        assert_eq!(
            conversion.segments(),
            &[Segment::image("https://img.example.com/gen/abc")]
        );
    }

    #[test]
    fn test_markdown_disabled_leaves_link_text() {
        let config = ConvertConfig {
            convert_markdown: false,
            ..ConvertConfig::default()
        };

        let text = "see ![x](https://a.com/page)";
        let conversion = service(config.clone()).convert(text);
        assert_eq!(conversion.segments(), &[Segment::plain(text)]);

        // The embedded URL can still be picked up as a bare image URL.
        let conversion = service(config).convert("see ![x](https://a.com/pic.png)");
        assert_eq!(
            conversion.segments(),
            &[
                Segment::plain("see ![x]("),
                Segment::image("https://a.com/pic.png"),
                Segment::plain(")"),
            ]
        );
    }

    #[test]
    fn test_cq_code_and_bare_url() {
        let conversion = service(ConvertConfig::default())
            .convert("[CQ:image,file=https://a.com/gen?seed=7]\nand https://b.com/x.gif");

        assert_eq!(
            conversion.into_segments(),
            vec![
                Segment::image("https://a.com/gen?seed=7"),
                Segment::plain("\nand "),
                Segment::image("https://b.com/x.gif"),
            ]
        );
    }

    #[test]
    fn test_text_without_links() {
        let conversion = service(ConvertConfig::default()).convert("hello world");
        assert_eq!(conversion.segments(), &[Segment::plain("hello world")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(service(ConvertConfig::default()).convert("").is_empty());
    }

    #[test]
    fn test_randomize_disabled_keeps_sentinel() {
        let config = ConvertConfig {
            randomize_seed: false,
            ..ConvertConfig::default()
        };
        let mut source = MockSeedSource::new();
        source.expect_next_seed().never();

        let url = "https://a.com/pic.png?seed=random";
        let conversion = ImageSegmentService::new(config, Arc::new(source)).convert(url);

        assert_eq!(conversion.segments(), &[Segment::image(url)]);
    }

    #[test]
    fn test_each_random_seed_is_generated_once() {
        let mut source = MockSeedSource::new();
        let mut next = 100;
        source.expect_next_seed().times(2).returning(move || {
            next += 1;
            next
        });

        let conversion = ImageSegmentService::new(ConvertConfig::default(), Arc::new(source))
            .convert("![a](https://a.com/1.png?seed=rand) https://a.com/2.png?seed=random");

        assert_eq!(
            conversion.into_segments(),
            vec![
                Segment::image("https://a.com/1.png?seed=101"),
                Segment::plain(" "),
                Segment::image("https://a.com/2.png?seed=102"),
            ]
        );
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let service = Arc::new(service(ConvertConfig::default()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    service
                        .convert(&format!("pic {i}: https://a.com/{i}.png"))
                        .image_count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
