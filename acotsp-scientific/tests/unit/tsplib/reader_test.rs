use super::*;
use crate::helpers::*;

fn get_example_problem_string() -> String {
    get_test_resource_string("data/square5.tsp")
}

#[test]
fn can_read_meta_errors() {
    for &(from, to, error) in &[
        ("TYPE : TSP", "TYPE : ATSP", "expecting 'TSP' as TYPE, got 'ATSP'"),
        ("TYPE : TSP\n", "", "missing TYPE"),
        ("DIMENSION : 5", "DIMENSION : asd", "cannot parse DIMENSION: 'asd'"),
        ("DIMENSION : 5", "DIMENSION : 0", "missing or empty DIMENSION"),
        ("DIMENSION : 5\n", "", "missing or empty DIMENSION"),
        ("EXACT_2D", "GEO", "unsupported EDGE_WEIGHT_TYPE: 'GEO'"),
        ("EDGE_WEIGHT_TYPE : EXACT_2D\n", "", "missing EDGE_WEIGHT_TYPE"),
        ("NODE_COORD_SECTION", "EDGE_WEIGHT_SECTION", "unsupported section: 'EDGE_WEIGHT_SECTION'"),
        ("NAME : square5", "NAME square5", "expected colon separated string, got: 'NAME square5'"),
    ] {
        let content = get_example_problem_string().replace(from, to);
        let mut reader = TsplibReader::new(BufReader::new(content.as_bytes()));

        let result = reader.read_meta().map(|_| ());

        assert_eq!(result, Err(error.into()));
    }
}

#[test]
fn can_read_meta_with_keys_in_any_order() {
    let content = "EDGE_WEIGHT_TYPE: CEIL_2D\n\nCOMMENT: first\nDIMENSION: 3\nCOMMENT: second\nTYPE: TSP\nNAME: shuffled\n\
                   NODE_COORD_SECTION\n";
    let mut reader = TsplibReader::new(BufReader::new(content.as_bytes()));

    let result = reader.read_meta();

    assert_eq!(result, Ok((3, DistanceKind::CeilEuclidean)));
    assert_eq!(reader.name.as_deref(), Some("shuffled"));
    assert_eq!(reader.comment.as_deref(), Some("first\nsecond"));
}

#[test]
fn can_report_missing_coord_section() {
    let content = "NAME : empty\nTYPE : TSP\nDIMENSION : 2\nEDGE_WEIGHT_TYPE : EUC_2D\n";

    let result = content.to_string().read_tsplib();

    assert_eq!(result, Err("unexpected end of file, expecting NODE_COORD_SECTION".into()));
}

#[test]
fn can_read_coordinate_errors() {
    for &(from, to, error) in &[
        ("5 0 0.5", "6 0 0.5", "node id 6 is out of range [1, 5]"),
        ("1 0 0\n", "0 0 0\n", "node id 0 is out of range [1, 5]"),
        ("5 0 0.5", "4 0 0.5", "duplicate node id: 4"),
        ("5 0 0.5", "5 0", "unexpected coord data: '5 0'"),
        ("5 0 0.5", "5 0 x", "cannot parse y: 'invalid float literal'"),
        ("5 0 0.5", "x 0 0.5", "cannot parse node id: 'x'"),
        ("5 0 0.5\nEOF\n", "", "unexpected end of file in NODE_COORD_SECTION"),
        ("EOF", "DISPLAY_DATA_SECTION", "expecting EOF, got: 'DISPLAY_DATA_SECTION'"),
    ] {
        let content = get_example_problem_string().replace(from, to);

        let result = content.read_tsplib();

        assert_eq!(result, Err(error.into()));
    }
}

#[test]
fn can_read_instance_from_file() {
    let instance = create_square5_instance();

    assert_eq!(instance.name, "square5");
    assert_eq!(instance.comment.as_deref(), Some("four corners of a unit square and a middle point of the left side"));
    assert_eq!(instance.kind, DistanceKind::Euclidean);
    assert_eq!(instance.size(), 5);
    assert_eq!(
        instance.coordinates,
        vec![
            Coordinate::new(0., 0.),
            Coordinate::new(0., 1.),
            Coordinate::new(1., 1.),
            Coordinate::new(1., 0.),
            Coordinate::new(0., 0.5)
        ]
    );
}

#[test]
fn can_read_instance_from_string_with_shuffled_ids_and_no_eof() {
    let content = "NAME : tiny\nTYPE : TSP\nDIMENSION : 3\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n\
                   3 2.0 2.0\n1 0 0\n2 1 1\n"
        .to_string();

    let instance = content.read_tsplib().expect("cannot read instance");

    assert_eq!(instance.name, "tiny");
    assert_eq!(instance.comment, None);
    assert_eq!(instance.kind, DistanceKind::RoundedEuclidean);
    assert_eq!(instance.coordinates, vec![Coordinate::new(0., 0.), Coordinate::new(1., 1.), Coordinate::new(2., 2.)]);
}

parameterized_test! {can_map_edge_weight_type, (edge_weight_type, expected), {
    let content = get_example_problem_string().replace("EXACT_2D", edge_weight_type);

    let instance = content.read_tsplib().expect("cannot read instance");

    assert_eq!(instance.kind, expected);
}}

can_map_edge_weight_type! {
    case01_euc: ("EUC_2D", DistanceKind::RoundedEuclidean),
    case02_ceil: ("CEIL_2D", DistanceKind::CeilEuclidean),
    case03_att: ("ATT", DistanceKind::Pseudo),
    case04_exact: ("EXACT_2D", DistanceKind::Euclidean),
}

#[test]
fn can_convert_instance_into_problem() {
    let problem = create_square5_instance().into_problem(2).expect("cannot create problem");

    assert_eq!(problem.size(), 5);
    assert_eq!(problem.candidates_size(), 2);
    assert_approx!(problem.distance(0, 2), 2f64.sqrt());
    assert_approx!(problem.tour_length(&[0, 4, 1, 2, 3]), 4.);
}

#[test]
fn can_reject_degenerate_instance() {
    let content = "TYPE : TSP\nDIMENSION : 1\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n1 0 0\nEOF\n".to_string();
    let instance = content.read_tsplib().expect("cannot read instance");

    let result = instance.into_problem(20);

    assert!(result.is_err());
}

parameterized_test! {can_reject_huge_dimension_without_allocation, (dimension, tail, expected), {
    let content = get_example_problem_string().replace("DIMENSION : 5", dimension).replace("EOF\n", tail);

    let result = content.read_tsplib();

    assert_eq!(result, Err(expected.into()));
}}

can_reject_huge_dimension_without_allocation! {
    case01_with_eof: ("DIMENSION : 1e18", "EOF\n", "unexpected coord data: 'EOF'"),
    case02_without_eof: ("DIMENSION : 1000000000000000000", "", "unexpected end of file in NODE_COORD_SECTION"),
}
