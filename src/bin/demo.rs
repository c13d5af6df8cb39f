use parse_curl::curl::parse;

fn main() {
    let curl_command = "curl 'http://example.com/' \\
  -H 'Accept-Encoding: gzip, deflate' \\
  -H 'Accept-Language: en-US,en;q=0.8' \\
  -H 'User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36' \\
  -H 'Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8' \\
  -H 'Connection: keep-alive' \\
  --compressed
";
    match parse(curl_command) {
        Ok(request) => println!("{}", request.to_json(true)),
        Err(e) => eprintln!("Error parsing curl command: {}", e),
    }
}
