use crate::filter::FilterError;
use crate::query::PageRequest;
use pretty_assertions::assert_eq;

#[test]
fn zero_page_is_rejected() {
    assert!(matches!(
        PageRequest::new(0, 10),
        Err(FilterError::ZeroPagination { name: "page" })
    ));
    assert!(matches!(
        PageRequest::new(1, 0),
        Err(FilterError::ZeroPagination { name: "per_page" })
    ));
}

#[test]
fn total_pages_is_at_least_one() {
    for per_page in [1usize, 2, 3, 7, 50, 1000] {
        let req = PageRequest::new(1, per_page).unwrap();
        for total in 0usize..200 {
            let expected = total.div_ceil(per_page).max(1);
            assert_eq!(req.total_pages(total), expected, "total={total} per_page={per_page}");
        }
    }
}

#[test]
fn bounds_are_clamped() {
    let req = PageRequest::new(3, 50).unwrap();
    assert_eq!(req.bounds(40), (40, 40));

    let req = PageRequest::new(2, 15).unwrap();
    assert_eq!(req.bounds(40), (15, 30));

    let req = PageRequest::new(3, 15).unwrap();
    assert_eq!(req.bounds(40), (30, 40));
}

#[test]
fn huge_page_numbers_do_not_overflow() {
    let req = PageRequest::new(usize::MAX, usize::MAX).unwrap();
    assert_eq!(req.bounds(10), (10, 10));
}
