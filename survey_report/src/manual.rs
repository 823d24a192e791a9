/*!

This is the long-form manual for `survey_report` and `evalreport`.

## Input format

The input is a UTF-8 text file exported from the course evaluation system.
Only two parts of it are read:

* the first line, which names the course, the section (NRC) and the term:

```text
ACAD102 - NRC 14397 - 2025/10
```

  The NRC is the second piece when the line is split on `-`. When the line has
  no `-`, the report shows `NRC desconocido`.

* the comment sections. A line starting with `Comentarios:` opens the general
  comments, a line starting with `Comentarios Música/Vitalizador:` opens the
  comments about the music and energizers:

```text
Comentarios:
Muy buena clase
Comentarios Música/Vitalizador:
Me gustó la música del inicio
```

  Each non-blank line of a section is one comment. If a marker appears several
  times, the last occurrence is used. A music section found without any general
  section is kept as a music section by default; set `musicWithoutGeneral` to
  `discard` (or pass `--music-only discard`) to drop it instead.

The results table in the file is not read. The report uses the table of the
ACAD102 2025/10 evaluation, or the `rows` of the configuration file.

## Output

```bash
evalreport -i evaluacion.txt --out reporte/
```

writes to `reporte/`:
* `index.html`, the report page with the general information, the results
  table, one chart per question and the comments;
* `grafica_<n>_<question>.png`, one bar chart per question, with the question
  as its title;
* `summary.json`, the same information in JSON format.

Without `--out`, or with `--out stdout` or an empty value, the JSON summary is
printed on the standard output.
With `--reference summary.json`, the program fails if the summary differs from
the given one, and prints the differences.

## Configuration

All the entries are optional:

```json
{
  "outputSettings": {
    "reportTitle": "ACAD102 2025/10",
    "chartWidth": 640,
    "chartHeight": 480
  },
  "musicWithoutGeneral": "independent",
  "rows": [
    { "question": "Los contenidos entregados fueron claros", "counts": [0, 0, 0, 3, 14] }
  ]
}
```

The counts follow the order `nunca`, `casi_nunca`, `a_veces`, `casi_siempre`,
`siempre`, and each count is at most 4294967295. The chart sides must be
between 100 and 4096 pixels.

## Logging

Set `RUST_LOG=debug` or pass `--verbose` to see where the sections were found.

*/
