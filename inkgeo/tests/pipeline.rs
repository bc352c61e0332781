use inkgeo::inkgeo_types::cartesian::Point2d;
use inkgeo::inkgeo_types::geo::GeoPoint2d;
use inkgeo::inkgeo_types::geometry::Geom;
use inkgeo::{
    Conversion, ConversionOptions, Converter, DiagnosticKind, PathCommand, Shape, ShapeElement,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sheet() -> Shape {
    Shape::Rect {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 500.0,
    }
}

/// Square drawn with relative path commands.
fn square_path(x: f64, y: f64, size: f64) -> Shape {
    Shape::Path(vec![
        PathCommand::move_to(x, y),
        PathCommand::line_to(size, 0.0).relative(),
        PathCommand::line_to(0.0, size).relative(),
        PathCommand::line_to(-size, 0.0).relative(),
        PathCommand::close(),
    ])
}

fn bowtie_path() -> Shape {
    Shape::Path(vec![
        PathCommand::move_to(300.0, 100.0),
        PathCommand::line_to(700.0, 400.0),
        PathCommand::line_to(700.0, 100.0),
        PathCommand::line_to(300.0, 400.0),
        PathCommand::close(),
    ])
}

async fn convert(elements: Vec<ShapeElement>, options: ConversionOptions) -> (Converter, Conversion) {
    init_logger();
    let converter = Converter::new(&sheet(), options).unwrap();
    let conversion = converter.convert(elements).await.unwrap();
    (converter, conversion)
}

fn on_globe(converter: &Converter, x: f64, y: f64) -> GeoPoint2d {
    let projector = converter.projector();
    projector
        .invert(&projector.normalize(&Point2d::new(x, y)))
        .point
}

#[tokio::test(flavor = "multi_thread")]
async fn concentric_squares_make_shell_with_hole_and_island() {
    let elements = vec![
        ShapeElement::new("atoll", square_path(200.0, 50.0, 400.0)),
        ShapeElement::new("atoll", square_path(280.0, 130.0, 240.0)),
        ShapeElement::new("atoll", square_path(360.0, 210.0, 80.0)),
    ];

    let (converter, conversion) = convert(elements, ConversionOptions::default()).await;
    assert!(conversion.diagnostics.is_empty());

    let atoll = conversion.get("atoll").unwrap();
    let mut holes: Vec<_> = atoll.polygons().map(|p| p.inner_contours.len()).collect();
    holes.sort();
    assert_eq!(holes, vec![0, 1]);

    assert!(atoll.contains_point(&on_globe(&converter, 220.0, 70.0)));
    assert!(!atoll.contains_point(&on_globe(&converter, 300.0, 150.0)));
    assert!(atoll.contains_point(&on_globe(&converter, 400.0, 250.0)));
    assert!(!atoll.contains_point(&on_globe(&converter, 900.0, 250.0)));
}

#[tokio::test(flavor = "multi_thread")]
async fn bowtie_is_repaired_into_lobes() {
    let (converter, conversion) = convert(
        vec![ShapeElement::new("bowtie", bowtie_path())],
        ConversionOptions::default(),
    )
    .await;

    let kinds: Vec<_> = conversion.diagnostics.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::SelfIntersectingRing]);
    assert_eq!(conversion.diagnostics[0].shape_id(), Some("bowtie"));

    let bowtie = conversion.get("bowtie").unwrap();
    assert!(bowtie.contains_point(&on_globe(&converter, 350.0, 250.0)));
    assert!(bowtie.contains_point(&on_globe(&converter, 650.0, 250.0)));
    assert!(!bowtie.contains_point(&on_globe(&converter, 500.0, 150.0)));
    assert!(!bowtie.contains_point(&on_globe(&converter, 500.0, 350.0)));
}

#[tokio::test(flavor = "multi_thread")]
async fn unlooped_bowtie_keeps_one_lobe() {
    let (_, conversion) = convert(
        vec![ShapeElement::new("bowtie", bowtie_path())],
        ConversionOptions::default().with_unloop_rings(true),
    )
    .await;

    assert!(conversion.diagnostics.is_empty());
    assert!(matches!(
        conversion.get("bowtie"),
        Some(Geom::Polygon(polygon)) if polygon.inner_contours.is_empty()
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn shapes_of_one_identifier_are_merged() {
    let elements = vec![
        ShapeElement::new("field", square_path(100.0, 100.0, 100.0)),
        ShapeElement::new("road", square_path(400.0, 100.0, 50.0)),
        ShapeElement::new(
            "field",
            Shape::Rect {
                x: 150.0,
                y: 150.0,
                width: 100.0,
                height: 100.0,
            },
        ),
    ];

    let (converter, conversion) = convert(elements, ConversionOptions::default()).await;

    let ids: Vec<_> = conversion.groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["field", "road"]);

    let field = conversion.get("field").unwrap();
    assert_eq!(field.polygons().count(), 1);
    assert!(field.contains_point(&on_globe(&converter, 120.0, 120.0)));
    assert!(field.contains_point(&on_globe(&converter, 230.0, 230.0)));
    assert!(!field.contains_point(&on_globe(&converter, 230.0, 120.0)));
}

#[tokio::test(flavor = "multi_thread")]
async fn problems_are_isolated_to_their_shapes() {
    let elements = vec![
        ShapeElement::new("dot", Shape::Polygon(vec![Point2d::new(10.0, 10.0)])),
        ShapeElement::new("pond", square_path(600.0, 200.0, 50.0)),
    ];

    let (_, conversion) = convert(elements, ConversionOptions::default()).await;

    assert_eq!(conversion.groups.len(), 1);
    assert_eq!(conversion.groups[0].id, "pond");
    assert_eq!(conversion.diagnostics.len(), 1);
    assert_eq!(conversion.diagnostics[0].kind(), DiagnosticKind::DegenerateRing);
    assert_eq!(conversion.diagnostics[0].shape_id(), Some("dot"));
}

#[tokio::test(flavor = "multi_thread")]
async fn geojson_output() {
    let (_, conversion) = convert(
        vec![ShapeElement::new("pond", square_path(600.0, 200.0, 50.0))],
        ConversionOptions::default(),
    )
    .await;

    let json: serde_json::Value = serde_json::from_str(&conversion.to_geojson().unwrap()).unwrap();
    let feature = &json["features"][0];
    assert_eq!(feature["properties"]["id"], "pond");
    assert_eq!(feature["geometry"]["type"], "Polygon");

    let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.first(), ring.last());
    for position in ring {
        let lon = position[0].as_f64().unwrap();
        let lat = position[1].as_f64().unwrap();
        assert!((0.0..180.0).contains(&lon));
        assert!((-90.0..90.0).contains(&lat));
    }
}
