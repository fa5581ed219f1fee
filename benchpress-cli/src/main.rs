fn main() -> anyhow::Result<()> {
    benchpress_cli::run()
}
