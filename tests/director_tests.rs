use car_builder::{
    AnyBuilder, Application, Builder, BuilderKind, CarBuilder, CarManualBuilder, DemoConfig,
    Director, Product, Profile,
};

/// Records every step it is asked to perform.
#[derive(Debug, Default)]
struct RecordingBuilder {
    calls: Vec<Call>,
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Reset,
    Seats(u8),
    Engine(String),
    TripComputer(bool),
    Gps(bool),
}

impl Builder for RecordingBuilder {
    fn reset(&mut self) {
        self.calls.push(Call::Reset);
    }

    fn set_seats(&mut self, seats: u8) {
        self.calls.push(Call::Seats(seats));
    }

    fn set_engine(&mut self, engine: &str) {
        self.calls.push(Call::Engine(engine.to_string()));
    }

    fn set_trip_computer(&mut self, enabled: bool) {
        self.calls.push(Call::TripComputer(enabled));
    }

    fn set_gps(&mut self, enabled: bool) {
        self.calls.push(Call::Gps(enabled));
    }
}

#[test]
fn test_sports_car_sequence() {
    let mut builder = RecordingBuilder::default();
    Director::new().construct_sports_car(&mut builder);

    assert_eq!(
        builder.calls,
        vec![
            Call::Reset,
            Call::Seats(2),
            Call::Engine("SportEngine".to_string()),
            Call::TripComputer(true),
            Call::Gps(true),
        ]
    );
}

#[test]
fn test_construct_dispatches_by_profile() {
    let director = Director::new();

    let mut sports = RecordingBuilder::default();
    director.construct(Profile::SportsCar, &mut sports);
    assert_eq!(sports.calls.len(), 5);

    let mut suv = RecordingBuilder::default();
    director.construct(Profile::Suv, &mut suv);
    assert!(suv.calls.is_empty());
}

#[test]
fn test_suv_leaves_real_builders_untouched() {
    let director = Director::new();

    let mut car_builder = CarBuilder::new();
    car_builder.set_seats(7);
    director.construct_suv(&mut car_builder);
    assert_eq!(car_builder.product().seats, Some(7));

    let mut manual_builder = CarManualBuilder::new();
    manual_builder.set_gps(true);
    director.construct_suv(&mut manual_builder);
    assert_eq!(manual_builder.get_product().sections().len(), 1);
}

#[test]
fn test_sports_car_end_to_end() {
    let mut builder = CarBuilder::new();
    Director::new().construct_sports_car(&mut builder);

    let car = builder.get_product();
    assert_eq!(car.seats, Some(2));
    assert_eq!(car.engine.as_deref(), Some("SportEngine"));
    assert!(car.trip_computer);
    assert!(car.gps);

    let next = builder.get_product();
    assert!(next.is_empty());
    assert_ne!(car, next);
}

#[test]
fn test_sports_car_manual_end_to_end() {
    let mut builder = CarManualBuilder::new();
    Director::new().construct_sports_car(&mut builder);

    let first = builder.get_product();
    let second = builder.get_product();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.sections().len(), 4);
    assert!(first.sections()[1].contains("SportEngine"));
}

#[test]
fn test_same_director_drives_both_builders() {
    let director = Director::new();
    let mut builders = [
        AnyBuilder::new(BuilderKind::Car),
        AnyBuilder::new(BuilderKind::Manual),
    ];

    for builder in builders.iter_mut() {
        director.construct_sports_car(builder.as_builder_mut());
    }

    let products: Vec<Product> = builders.iter_mut().map(AnyBuilder::finish).collect();
    match &products[..] {
        [Product::Car(car), Product::Manual(manual)] => {
            assert_eq!(car.seats, Some(2));
            assert_eq!(manual.sections().len(), 4);
        }
        other => panic!("unexpected products: {:?}", other),
    }
}

#[test]
fn test_make_car_matches_default_config_run() {
    let app = Application::new();
    let (car, manual) = app.make_car();

    let products = app.run(&DemoConfig::default()).unwrap();
    assert_eq!(products, vec![Product::Car(car), Product::Manual(manual)]);
}
