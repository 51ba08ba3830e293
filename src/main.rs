fn main() -> anyhow::Result<()> {
    builtin_embed::run()
}
