mod tests {
    use myrtio_ring_composer::PixelMapper;

    #[test]
    fn test_mapper_is_bijection() {
        for len in 1..=40 {
            for offset in 0..len * 2 {
                let mapper = PixelMapper::new(offset, len);
                let mut seen = vec![false; len];
                for pos in 0..len {
                    let physical = mapper.map(pos);
                    assert!(physical < len);
                    assert!(!seen[physical]);
                    seen[physical] = true;
                }
            }
        }
    }

    #[test]
    fn test_mapper_rotates_by_offset() {
        let mapper = PixelMapper::new(18, 36);
        assert_eq!(mapper.map(0), 18);
        assert_eq!(mapper.map(17), 35);
        assert_eq!(mapper.map(18), 0);
        assert_eq!(mapper.map(35), 17);
    }

    #[test]
    fn test_mapper_wraps_offset() {
        let mapper = PixelMapper::new(40, 36);
        assert_eq!(mapper.offset(), 4);
        assert_eq!(mapper.map(0), 4);
        assert_eq!(PixelMapper::new(0, 36).map(5), 5);
    }
}
