use benes::{route_permutation, PermutationBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benes=debug")))
        .init();

    // drag the path ending at output 0 down to output 3
    let (order, permutation) = PermutationBuilder::with_order(2)
        .move_output(0, 3)
        .build()
        .unwrap();

    assert_eq!(format!("{}", permutation), "[3 0 1 2]");

    let routing = route_permutation(order.get(), &permutation).unwrap();
    routing.check(&permutation).unwrap();

    for path in routing.paths() {
        println!("{}", path);
    }

    assert_eq!(format!("{}", routing), "0011
1102
2233
3320
");
    print!("{}", routing);
}
