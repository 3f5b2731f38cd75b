use fundraiser_server::Error;

fn main() -> Result<(), Error> {
    fundraiser_server::run(true)
}
