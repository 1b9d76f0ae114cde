use super::*;
use crate::helpers::create_square5_instance;

fn write_to_string(name: &str, tour: &Tour) -> String {
    let mut buffer = Vec::new();

    (name, tour).write_tsplib(BufWriter::new(&mut buffer)).expect("cannot write tour");

    String::from_utf8(buffer).expect("not a valid utf8")
}

#[test]
fn can_write_tour_with_one_based_ids() {
    let problem = create_square5_instance().into_problem(4).expect("cannot create problem");
    let tour = Tour::new(&problem, vec![0, 4, 1, 2, 3]);

    let result = write_to_string("square5.tour", &tour);

    assert_eq!(
        result,
        "NAME : square5.tour\nCOMMENT : Length = 4\nTYPE : TOUR\nDIMENSION : 5\nTOUR_SECTION\n1\n5\n2\n3\n4\n-1\nEOF\n"
    );
}

#[test]
fn can_write_fractional_length() {
    let tour = Tour::new_with_length(vec![1, 0, 2], 3.25);

    let result = write_to_string("tiny", &tour);

    assert!(result.contains("COMMENT : Length = 3.25\n"));
    assert!(result.ends_with("TOUR_SECTION\n2\n1\n3\n-1\nEOF\n"));
}
